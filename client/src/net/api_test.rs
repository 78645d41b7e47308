use super::*;

// =============================================================
// Request augmentation
// =============================================================

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", api_base()));
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

// =============================================================
// 401 purge decision
// =============================================================

#[test]
fn purges_on_bearer_authenticated_401() {
    assert!(should_purge_session(401, true));
}

#[test]
fn anonymous_401_does_not_purge() {
    assert!(!should_purge_session(401, false));
}

#[test]
fn other_statuses_never_purge() {
    for status in [200, 400, 403, 404, 500] {
        assert!(!should_purge_session(status, true), "status {status}");
    }
}

// =============================================================
// Error-body extraction
// =============================================================

#[test]
fn error_message_prefers_detail_field() {
    let body = r#"{"detail":"Invalid email or password"}"#;
    assert_eq!(error_message(401, body), "Invalid email or password");
}

#[test]
fn error_message_falls_back_to_envelope_message() {
    let body = r#"{"success":false,"message":"Transaction not found"}"#;
    assert_eq!(error_message(404, body), "Transaction not found");
}

#[test]
fn error_message_generic_on_unparseable_body() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed: 502");
}

// =============================================================
// Envelope unwrapping
// =============================================================

#[test]
fn unwrap_envelope_returns_payload() {
    let envelope = ApiEnvelope {
        success: true,
        message: "ok".to_owned(),
        data: Some(7_u32),
        errors: None,
    };
    assert_eq!(unwrap_envelope(200, envelope), Ok(7));
}

#[test]
fn unwrap_envelope_rejects_missing_payload() {
    let envelope: ApiEnvelope<u32> = ApiEnvelope {
        success: true,
        message: "ok".to_owned(),
        data: None,
        errors: None,
    };
    assert_eq!(
        unwrap_envelope(200, envelope),
        Err(ApiError::Api { status: 200, message: "ok".to_owned() })
    );
}

#[test]
fn ack_envelope_accepts_payload_less_success() {
    let envelope: ApiEnvelope<serde_json::Value> = ApiEnvelope {
        success: true,
        message: "Role updated to admin".to_owned(),
        data: None,
        errors: None,
    };
    assert_eq!(ack_envelope(200, envelope), Ok(()));
}

#[test]
fn ack_envelope_rejects_failure() {
    let envelope: ApiEnvelope<serde_json::Value> = ApiEnvelope {
        success: false,
        message: "nope".to_owned(),
        data: None,
        errors: None,
    };
    assert!(ack_envelope(200, envelope).is_err());
}

// =============================================================
// Credential-rejection classification
// =============================================================

#[test]
fn classify_auth_failure_retypes_rejection_statuses() {
    for status in [400, 401, 409, 422] {
        let error = ApiError::Api { status, message: "bad credentials".to_owned() };
        assert_eq!(
            classify_auth_failure(error),
            ApiError::Auth("bad credentials".to_owned()),
            "status {status}"
        );
    }
}

#[test]
fn classify_auth_failure_passes_through_other_errors() {
    let server = ApiError::Api { status: 500, message: "boom".to_owned() };
    assert_eq!(classify_auth_failure(server.clone()), server);

    let transport = ApiError::Transport("offline".to_owned());
    assert_eq!(classify_auth_failure(transport.clone()), transport);
}

// =============================================================
// Query building
// =============================================================

#[test]
fn transactions_query_pagination_only() {
    assert_eq!(transactions_query(30, 15, None, None), "?skip=30&limit=15");
}

#[test]
fn transactions_query_encodes_category() {
    assert_eq!(
        transactions_query(0, 15, Some("Food & Groceries"), None),
        "?skip=0&limit=15&category=Food%20%26%20Groceries"
    );
}

#[test]
fn transactions_query_includes_flag_filter() {
    assert_eq!(transactions_query(0, 50, None, Some(true)), "?skip=0&limit=50&flagged=true");
    assert_eq!(transactions_query(0, 50, None, Some(false)), "?skip=0&limit=50&flagged=false");
}

#[test]
fn role_patch_path_includes_role_query() {
    assert_eq!(role_patch_path("u-1", Role::Admin), "/admin/users/u-1/role?role=admin");
    assert_eq!(role_patch_path("u-1", Role::User), "/admin/users/u-1/role?role=user");
}
