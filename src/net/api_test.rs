use serde_json::json;

use super::*;

fn reply(status: u16, body: &str) -> HttpReply {
    HttpReply {
        status,
        body: body.to_owned(),
    }
}

#[test]
fn save_request_serializes_expected_fields() {
    let request = SaveRequest {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        note: "note".to_owned(),
        city: "X".to_owned(),
        favorites: ["alpha", "beta"].into_iter().collect(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "A",
            "email": "a@x.com",
            "note": "note",
            "city": "X",
            "favorites": ["alpha", "beta"],
        })
    );
}

#[test]
fn success_range_is_2xx() {
    assert!(reply(200, "").is_success());
    assert!(reply(204, "").is_success());
    assert!(!reply(199, "").is_success());
    assert!(!reply(302, "").is_success());
    assert!(!reply(500, "").is_success());
}

#[test]
fn parse_save_reply_returns_json_body() {
    let value = parse_save_reply(&reply(200, r#"{"ok":true,"id":7}"#)).unwrap();
    assert_eq!(value, json!({"ok": true, "id": 7}));
}

#[test]
fn parse_save_reply_rejects_non_success_without_detail() {
    let err = parse_save_reply(&reply(422, r#"{"detail":"bad email"}"#)).unwrap_err();
    assert!(matches!(err, SaveError::Rejected));
    assert_eq!(err.to_string(), "Failed to save");
}

#[test]
fn parse_save_reply_reports_non_json_success_body() {
    let err = parse_save_reply(&reply(200, "<html>")).unwrap_err();
    assert!(matches!(err, SaveError::Decode(_)));
}
