//! Client implementations (async + optional blocking).

#[cfg(feature = "async")]
pub mod async_client;
#[cfg(feature = "blocking")]
pub mod blocking_client;
mod shared;

#[cfg(feature = "async")]
pub use async_client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{BlockingClient, BlockingClientBuilder};

use crate::{Error, util::url::normalize_base_url};

/// EDI platform surface (transactions).
pub const CORE_BASE_URL: &str = "https://core.us.stedi.com/2023-08-01";
/// Healthcare surface (eligibility, payers).
pub const HEALTHCARE_BASE_URL: &str = "https://healthcare.us.stedi.com/2024-04-01";
/// Enrollments surface (enrollments, providers).
pub const ENROLLMENTS_BASE_URL: &str = "https://enrollments.us.stedi.com/2024-09-01";

/// Base URLs of the three Stedi API surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrls {
    pub core: String,
    pub healthcare: String,
    pub enrollments: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            core: CORE_BASE_URL.to_owned(),
            healthcare: HEALTHCARE_BASE_URL.to_owned(),
            enrollments: ENROLLMENTS_BASE_URL.to_owned(),
        }
    }
}

impl BaseUrls {
    /// Point every surface at the same base URL (proxies, mock servers).
    #[must_use]
    pub fn all(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            core: base.clone(),
            healthcare: base.clone(),
            enrollments: base,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for raw in [&self.core, &self.healthcare, &self.enrollments] {
            normalize_base_url(raw)?;
        }
        Ok(())
    }
}

/// Body returned by `download_file`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Downloaded {
    /// The body was valid UTF-8.
    Text(String),
    /// Anything else, unchanged.
    Raw(Vec<u8>),
}

impl Downloaded {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(err) => Self::Raw(err.into_bytes()),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }
}
