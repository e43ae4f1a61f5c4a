use crate::{Error, util::redact::REDACTED};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// A single query parameter value.
///
/// [`QueryValue::Many`] serializes as repeated `key=value` pairs
/// (`tags=a&tags=b`), never bracket or index notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Single(value.to_string())
    }
}

macro_rules! query_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

query_value_from_number!(i32, i64, u32, u64, usize, f64);

impl<S: Into<String>> From<Vec<S>> for QueryValue {
    fn from(values: Vec<S>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for QueryValue {
    fn from(values: [S; N]) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flatten a serializable struct into query parameters.
    ///
    /// `null` fields are skipped, arrays become repeated keys, strings are
    /// used as-is and other scalars use their JSON text.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(value).map_err(|err| Error::InvalidConfig {
            message: "failed to serialize query parameters".into(),
            source: Some(Box::new(err)),
        })?;

        let Value::Object(map) = value else {
            return Err(Error::InvalidConfig {
                message: "query parameters must serialize to a JSON object".into(),
                source: None,
            });
        };

        let mut params = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                    params.insert(key, QueryValue::Many(items));
                }
                other => {
                    if let Some(text) = scalar_text(&other) {
                        params.insert(key, QueryValue::Single(text));
                    }
                }
            }
        }
        Ok(params)
    }

    /// Pairs handed to the transport, one per sequence element.
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                QueryValue::Single(value) => pairs.push((key.clone(), value.clone())),
                QueryValue::Many(values) => {
                    pairs.extend(values.iter().map(|value| (key.clone(), value.clone())));
                }
            }
        }
        pairs
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.0 {
            let value = match value {
                QueryValue::Single(value) => Value::String(value.clone()),
                QueryValue::Many(values) => {
                    Value::Array(values.iter().cloned().map(Value::String).collect())
                }
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Per-call request configuration.
///
/// Caller headers are merged first; the client then sets `Authorization` and
/// `Content-Type`, so those two cannot be overridden here.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// JSON request body.
    pub body: Option<Value>,
    pub query: QueryParams,
    pub headers: HeaderMap,
    /// Overrides the client-wide request timeout.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        let body = serde_json::to_value(body).map_err(|err| Error::InvalidConfig {
            message: "failed to serialize request body".into(),
            source: Some(Box::new(err)),
        })?;
        self.body = Some(body);
        Ok(self)
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Caller configuration as log metadata. Sensitive header values and
    /// values equal to `secret` are replaced with `<redacted>`.
    pub(crate) fn log_meta(&self, secret: &str) -> Value {
        let mut headers = Map::new();
        for (name, value) in &self.headers {
            let shown = match value.to_str() {
                _ if value.is_sensitive() => REDACTED,
                Ok(text) if !secret.is_empty() && text.contains(secret) => REDACTED,
                Ok(text) => text,
                Err(_) => "<binary>",
            };
            headers.insert(name.as_str().to_owned(), Value::String(shown.to_owned()));
        }

        let mut meta = Map::new();
        if let Some(body) = &self.body {
            meta.insert("data".into(), body.clone());
        }
        if !self.query.is_empty() {
            meta.insert("params".into(), self.query.to_json());
        }
        if !headers.is_empty() {
            meta.insert("headers".into(), Value::Object(headers));
        }
        Value::Object(meta)
    }
}
