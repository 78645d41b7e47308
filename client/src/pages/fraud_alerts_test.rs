use super::*;

#[test]
fn score_percent_formats_one_decimal() {
    assert_eq!(score_percent(0.724), "72.4%");
    assert_eq!(score_percent(1.0), "100.0%");
}

#[test]
fn score_bar_width_clamps_to_meter_range() {
    assert_eq!(score_bar_width(0.5), 50.0);
    assert_eq!(score_bar_width(1.2), 100.0);
    assert_eq!(score_bar_width(-0.1), 0.0);
}
