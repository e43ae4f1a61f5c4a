use http::{Method, StatusCode};
use std::{error::Error as StdError, fmt};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a download target is outside the Stedi domain.
pub(crate) const INVALID_URL_MESSAGE: &str =
    "Invalid URL: The URL must be from the Stedi API (stedi.com or its subdomains)";

#[derive(Debug, Clone, Copy)]
pub struct BodySnippetConfig {
    pub enabled: bool,
    pub max_bytes: usize,
}

impl Default for BodySnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: 4096,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidUrl,
    Api,
    Transport,
    Decode,
    InvalidConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

/// Failure response received from the Stedi API.
///
/// Carries only what is safe to log: no request headers, no request body and
/// no credential.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    pub method: Method,
    /// Sanitized URL: no query/fragment/userinfo.
    pub url: Box<Url>,
    pub request_id: Option<Box<str>>,
    pub body_snippet: Option<Box<str>>,
    /// Response body parsed as JSON (when it was JSON).
    pub body: Option<serde_json::Value>,
}

impl HttpError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} ({} {})", self.status, self.method, self.path())?;
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}

impl StdError for HttpError {}

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Download target is not an `https` URL on `stedi.com` or a subdomain.
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl { url: Box<str> },

    /// The API answered with a non-2xx status.
    #[error("Request to Stedi API failed: {message}")]
    Api {
        message: Box<str>,
        #[source]
        source: HttpError,
    },

    /// No response arrived; displays exactly as the underlying network error.
    #[error("{source}")]
    Transport {
        method: Method,
        path: Box<str>,
        kind: TransportErrorKind,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Decode error (HTTP {status}) during {method} {path}: {source}")]
    Decode {
        status: StatusCode,
        method: Method,
        path: Box<str>,
        request_id: Option<Box<str>>,
        body_snippet: Option<Box<str>>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::Api { .. } => ErrorKind::Api,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { source, .. } => Some(source.status),
            Self::Decode { status, .. } => Some(*status),
            Self::InvalidUrl { .. } | Self::Transport { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { source, .. } => source.request_id.as_deref(),
            Self::Decode { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Failure response details, when the API answered.
    #[must_use]
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Api { source, .. }
                if matches!(source.status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    pub(crate) fn invalid_url(url: &str) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}
