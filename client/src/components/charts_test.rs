use super::*;

fn breakdown(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(name, amount)| ((*name).to_owned(), *amount)).collect()
}

#[test]
fn category_entries_sorted_largest_first() {
    let data = breakdown(&[("Housing", 40.0), ("Shopping", 60.0), ("Utilities", 10.0)]);
    let entries = category_entries(&data);
    let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Shopping", "Housing", "Utilities"]);
}

#[test]
fn known_categories_have_distinct_colors() {
    assert_ne!(category_color("Housing"), category_color("Shopping"));
    assert_eq!(category_color("Something Else"), "#94a3b8");
}

#[test]
fn bar_width_scales_against_max() {
    assert!((bar_width_pct(50.0, 100.0) - 50.0).abs() < f64::EPSILON);
    assert!((bar_width_pct(100.0, 100.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_guards_degenerate_inputs() {
    assert_eq!(bar_width_pct(10.0, 0.0), 0.0);
    assert_eq!(bar_width_pct(-5.0, 100.0), 0.0);
}

#[test]
fn percent_of_formats_one_decimal() {
    assert_eq!(percent_of(25.0, 100.0), "25.0%");
    assert_eq!(percent_of(1.0, 3.0), "33.3%");
}

#[test]
fn percent_of_zero_total_is_zero() {
    assert_eq!(percent_of(10.0, 0.0), "0.0%");
}

#[test]
fn trend_points_label_each_month() {
    let trend = vec![
        MonthlyTrendPoint { year: 2025, month: 12, total: 90.0, count: 4 },
        MonthlyTrendPoint { year: 2026, month: 1, total: 120.0, count: 6 },
    ];
    let points = trend_points(&trend);
    assert_eq!(points[0].0, "Dec 2025");
    assert_eq!(points[1].0, "Jan 2026");
    assert!((points[1].1 - 120.0).abs() < f64::EPSILON);
}

#[test]
fn polyline_spans_width_and_inverts_y() {
    let points = polyline_points(&[0.0, 100.0], 100.0, 50.0);
    // First point sits on the baseline, second touches the top-right corner.
    assert_eq!(points, "0.0,50.0 100.0,0.0");
}

#[test]
fn polyline_single_point_renders_flat_line() {
    let points = polyline_points(&[40.0], 100.0, 50.0);
    let coords: Vec<&str> = points.split(' ').collect();
    assert_eq!(coords.len(), 2);
    assert!(coords[0].starts_with("0.0,"));
    assert!(coords[1].starts_with("100.0,"));
}

#[test]
fn polyline_empty_input_is_empty() {
    assert_eq!(polyline_points(&[], 100.0, 50.0), "");
}
