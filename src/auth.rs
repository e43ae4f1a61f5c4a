use crate::Error;
use http::{
    HeaderMap, HeaderValue,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use std::fmt;

/// API key wrapper that never prints its value.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Stedi API key credential.
///
/// Sent verbatim in `Authorization` (no scheme prefix).
#[derive(Clone, Debug)]
pub struct ApiKey(SecretString);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<SecretString>) -> Self {
        Self(key.into())
    }

    pub(crate) fn secret(&self) -> &str {
        self.0.expose()
    }

    /// Insert `Authorization` and `Content-Type: application/json`, replacing
    /// any caller-supplied values for those names.
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        let mut value = HeaderValue::from_str(self.0.expose()).map_err(|err| {
            Error::InvalidConfig {
                message: "invalid Authorization header value".into(),
                source: Some(Box::new(err)),
            }
        })?;
        value.set_sensitive(true);

        headers.insert(AUTHORIZATION, value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(())
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SecretString> for ApiKey {
    fn from(value: SecretString) -> Self {
        Self(value)
    }
}
