//! Status-to-verdict translation.
//!
//! The verdict texts are a fixed contract with the original notifications
//! and must not drift, down to the byte.

use hwbot_core::error::HwbotError;
use serde_json::Value;

/// The three recognized status codes and their verdict texts.
const VERDICTS: [(&str, &str); 3] = [
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Translate one homework record into the notification text.
pub fn parse_status(homework: &Value) -> Result<String, HwbotError> {
    let missing: Vec<&str> = ["homework_name", "status"]
        .into_iter()
        .filter(|key| homework.get(key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(HwbotError::Payload(format!(
            "homework record missing keys: {}",
            missing.join(", ")
        )));
    }

    let name = homework["homework_name"].as_str().ok_or_else(|| {
        HwbotError::Payload("expected \"homework_name\" to be a string".to_string())
    })?;
    let status = homework["status"]
        .as_str()
        .ok_or_else(|| HwbotError::Payload("expected \"status\" to be a string".to_string()))?;

    let verdict = VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
        .ok_or_else(|| HwbotError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
