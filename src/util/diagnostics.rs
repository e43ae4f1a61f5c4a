use crate::{BodySnippetConfig, auth::ApiKey};
use http::{HeaderMap, StatusCode};
use serde_json::Value;

use super::redact::{redact_text, truncate_utf8};

/// Tries one known failure-body shape.
type MessageExtractor = fn(&Value) -> Option<&str>;

/// Probed in order; the first non-empty string wins.
const MESSAGE_EXTRACTORS: &[MessageExtractor] = &[message_field, detail_field];

fn message_field(body: &Value) -> Option<&str> {
    non_empty_str(body, "message")
}

fn detail_field(body: &Value) -> Option<&str> {
    non_empty_str(body, "detail")
}

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|msg| !msg.trim().is_empty())
}

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    for name in [
        "x-request-id",
        "x-amzn-requestid",
        "x-amz-request-id",
        "x-correlation-id",
    ] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string().into_boxed_str());
            }
        }
    }
    None
}

pub(crate) fn parse_body(body: &[u8]) -> Option<Value> {
    serde_json::from_slice(body).ok()
}

/// Human-readable text for a failure response: `message`, then `detail`,
/// then the generic status line.
pub(crate) fn failure_message(status: StatusCode, body: Option<&Value>) -> String {
    body.and_then(|body| {
        MESSAGE_EXTRACTORS
            .iter()
            .find_map(|extract| extract(body))
    })
    .map(ToOwned::to_owned)
    .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

pub(crate) fn body_snippet(body: &[u8], config: BodySnippetConfig, key: &ApiKey) -> Option<Box<str>> {
    if !config.enabled || body.is_empty() {
        return None;
    }

    let body = redact_text(String::from_utf8_lossy(body).into_owned(), key);
    Some(truncate_utf8(&body, config.max_bytes).into())
}
