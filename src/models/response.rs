use serde_json::Value;

use crate::models::{Mode, ResponseShape};
use crate::utils::pretty_json;

/// What a successful request returned.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReply {
    /// A JSON payload; any of `analysis`, `result`, `alerts`, `error` may be missing.
    Json(Value),
    /// A binary scan report, as `/scan-web` sends on success.
    Report(ScanReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Picks the text to display for a JSON payload.
///
/// Order: the mode's own response key, then `error`, then the whole payload
/// pretty-printed. Falsy values (`null`, `false`, `0`, `""`) count as absent.
pub fn select_text(mode: Mode, payload: &Value) -> String {
    let route = mode.route();

    if let Some(value) = truthy_field(payload, route.response_key) {
        return match (route.response_shape, value) {
            (ResponseShape::Text, Value::String(text)) => text.clone(),
            _ => pretty_json(value),
        };
    }

    if let Some(error) = truthy_field(payload, "error") {
        return match error {
            Value::String(message) => format!("Error: {message}"),
            other => format!("Error: {other}"),
        };
    }

    pretty_json(payload)
}

fn truthy_field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| is_truthy(value))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
