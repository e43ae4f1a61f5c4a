use crate::auth::ApiKey;
use serde_json::Value;

pub(crate) const REDACTED: &str = "<redacted>";

pub(crate) fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Replaces whole occurrences of the key. A match that runs into a
/// neighbouring word character is part of another token and is left alone.
pub(crate) fn redact_text(text: String, key: &ApiKey) -> String {
    let secret = key.secret();
    if secret.is_empty() || !text.contains(secret) {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in text.match_indices(secret) {
        let end = start + secret.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before.is_some_and(is_token_char) || after.is_some_and(is_token_char) {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str(REDACTED);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

/// Applies [`redact_text`] to every string inside a parsed body.
pub(crate) fn redact_value(value: &mut Value, key: &ApiKey) {
    match value {
        Value::String(text) => *text = redact_text(std::mem::take(text), key),
        Value::Array(items) => items.iter_mut().for_each(|item| redact_value(item, key)),
        Value::Object(map) => map.values_mut().for_each(|item| redact_value(item, key)),
        _ => {}
    }
}
