use super::*;
use hwbot_core::error::HwbotError;
use serde_json::json;

// --- check_response ---

#[test]
fn test_valid_response() {
    let body = json!({
        "homeworks": [{"homework_name": "proj1", "status": "approved"}],
        "current_date": 1000
    });
    let snap = check_response(&body).unwrap();
    assert_eq!(snap.homeworks.len(), 1);
    assert_eq!(snap.current_date, 1000);
}

#[test]
fn test_empty_homeworks_is_valid() {
    let body = json!({"homeworks": [], "current_date": 1000});
    let snap = check_response(&body).unwrap();
    assert!(snap.homeworks.is_empty());
}

#[test]
fn test_response_not_an_object() {
    let err = check_response(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, HwbotError::Payload(_)));
    assert!(err.to_string().contains("array"));
}

#[test]
fn test_response_missing_homeworks() {
    let err = check_response(&json!({"current_date": 1000})).unwrap_err();
    assert!(err.to_string().contains("homeworks"));
}

#[test]
fn test_homeworks_not_an_array() {
    let err = check_response(&json!({"homeworks": "nope", "current_date": 1000})).unwrap_err();
    assert!(matches!(err, HwbotError::Payload(_)));
    assert!(err.to_string().contains("string"));
}

#[test]
fn test_response_missing_current_date() {
    let err = check_response(&json!({"homeworks": []})).unwrap_err();
    assert!(err.to_string().contains("current_date"));
}

#[test]
fn test_current_date_not_an_integer() {
    let err = check_response(&json!({"homeworks": [], "current_date": "soon"})).unwrap_err();
    assert!(matches!(err, HwbotError::Payload(_)));
}

// --- parse_status ---

#[test]
fn test_parse_status_approved() {
    let hw = json!({"homework_name": "proj1", "status": "approved"});
    assert_eq!(
        parse_status(&hw).unwrap(),
        "Изменился статус проверки работы \"proj1\". \
         Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_parse_status_reviewing() {
    let hw = json!({"homework_name": "proj2", "status": "reviewing"});
    assert_eq!(
        parse_status(&hw).unwrap(),
        "Изменился статус проверки работы \"proj2\". \
         Работа взята на проверку ревьюером."
    );
}

#[test]
fn test_parse_status_rejected() {
    let hw = json!({"homework_name": "proj3", "status": "rejected"});
    assert_eq!(
        parse_status(&hw).unwrap(),
        "Изменился статус проверки работы \"proj3\". \
         Работа проверена: у ревьюера есть замечания."
    );
}

#[test]
fn test_parse_status_unknown_code() {
    let hw = json!({"homework_name": "proj1", "status": "burned"});
    let err = parse_status(&hw).unwrap_err();
    assert!(matches!(err, HwbotError::UnknownStatus(ref s) if s == "burned"));
}

#[test]
fn test_parse_status_missing_keys_reported_together() {
    let err = parse_status(&json!({})).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("homework_name"), "got: {msg}");
    assert!(msg.contains("status"), "got: {msg}");
}

#[test]
fn test_parse_status_missing_name_only() {
    let err = parse_status(&json!({"status": "approved"})).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("homework_name"));
    assert!(!msg.contains(", status"));
}

#[test]
fn test_parse_status_mistyped_name() {
    let hw = json!({"homework_name": 7, "status": "approved"});
    let err = parse_status(&hw).unwrap_err();
    assert!(matches!(err, HwbotError::Payload(_)));
}
