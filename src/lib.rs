//! Stedi-SDK – typed healthcare API clients, **async** *or* **blocking**.
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> stedi_sdk::Result<()> {
//! let client = stedi_sdk::Client::new("my-api-key")?;
//! let payers = client.payers().get().await?;
//! println!("{} payers", payers.len());
//! # Ok(())
//! # }
//! ```

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `async` (default) or `blocking`.");

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

mod util;

pub use auth::{ApiKey, SecretString};
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
pub use client::{BaseUrls, Downloaded};
pub use error::{BodySnippetConfig, Error, ErrorKind, HttpError, Result, TransportErrorKind};
pub use logger::{ConsoleLogger, LogLevel, Logger, NoopLogger, logger, set_logger};
#[cfg(feature = "tracing")]
pub use logger::TracingLogger;
pub use transport::request::{QueryParams, QueryValue, RequestOptions};
pub use types::*;
