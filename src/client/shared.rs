//! Request preparation and response handling shared by both clients.

use crate::{
    BaseUrls, BodySnippetConfig, Error, HttpError, LogLevel, Logger, RequestOptions,
    auth::ApiKey,
    logger,
    transport::{TransportBody, TransportRequest, TransportResponse},
    util::{
        diagnostics,
        redact::redact_value,
        url::{endpoint_url, normalize_base_url, sanitize_url_for_error, validate_download_url},
    },
};
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use url::Url;

#[cfg(any(feature = "tracing", feature = "metrics"))]
use crate::ErrorKind;
#[cfg(any(feature = "tracing", feature = "metrics"))]
use http::StatusCode;
#[cfg(feature = "tracing")]
use tracing::field;

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) struct Shared {
    pub(crate) api_key: ApiKey,
    pub(crate) base_urls: BaseUrls,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HeaderMap,
    pub(crate) body_snippet: BodySnippetConfig,
    pub(crate) logger: Option<Arc<dyn Logger>>,
}

impl Shared {
    /// Client logger, else the process-wide one (read on every call).
    pub(crate) fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone().unwrap_or_else(logger::logger)
    }

    fn headers(&self, extra: &HeaderMap) -> Result<HeaderMap, Error> {
        let mut headers = self.default_headers.clone();
        headers.extend(extra.clone());
        self.api_key.apply(&mut headers)?;
        Ok(headers)
    }

    pub(crate) fn prepare_request(
        &self,
        base_url: &str,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<TransportRequest, Error> {
        let url = endpoint_url(&normalize_base_url(base_url)?, path)?;
        let headers = self.headers(&options.headers)?;

        let body = options
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| Error::InvalidConfig {
                message: "failed to encode request body".into(),
                source: Some(Box::new(err)),
            })?;

        let logger = self.logger();
        if logger.enabled(LogLevel::Debug) {
            logger.debug(
                "Stedi API request",
                Some(&json!({
                    "method": method.as_str(),
                    "path": path,
                    "config": options.log_meta(self.api_key.secret()),
                })),
            );
        }

        Ok(TransportRequest {
            method,
            url,
            headers,
            query: options.query.to_pairs(),
            body: body.map(|bytes| TransportBody {
                bytes,
                content_type: None,
            }),
            timeout: options.timeout.unwrap_or(self.timeout),
        })
    }

    /// Rejects targets outside the Stedi domain before anything is sent.
    pub(crate) fn prepare_download(&self, raw_url: &str) -> Result<TransportRequest, Error> {
        let url = validate_download_url(raw_url)?;
        let headers = self.headers(&HeaderMap::new())?;

        let logger = self.logger();
        if logger.enabled(LogLevel::Debug) {
            logger.debug(
                "Stedi file download",
                Some(&json!({ "url": sanitize_url_for_error(&url).as_str() })),
            );
        }

        Ok(TransportRequest {
            method: Method::GET,
            url,
            headers,
            query: Vec::new(),
            body: None,
            timeout: self.timeout,
        })
    }

    /// Turn any non-2xx response into [`Error::Api`].
    pub(crate) fn check_status(
        &self,
        method: &Method,
        url: &Url,
        resp: TransportResponse,
    ) -> Result<TransportResponse, Error> {
        if resp.status.is_success() {
            return Ok(resp);
        }

        let mut body = diagnostics::parse_body(&resp.body);
        if let Some(body) = body.as_mut() {
            redact_value(body, &self.api_key);
        }
        let message = diagnostics::failure_message(resp.status, body.as_ref());

        Err(Error::Api {
            message: message.into_boxed_str(),
            source: HttpError {
                status: resp.status,
                method: method.clone(),
                url: Box::new(sanitize_url_for_error(url)),
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: diagnostics::body_snippet(
                    &resp.body,
                    self.body_snippet,
                    &self.api_key,
                ),
                body,
            },
        })
    }

    /// Decode a successful body into `T`; an empty body reads as `null`.
    pub(crate) fn decode<T: DeserializeOwned>(
        &self,
        method: &Method,
        url: &Url,
        resp: &TransportResponse,
    ) -> Result<T, Error> {
        let body: &[u8] = if resp.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &resp.body
        };

        let logger = self.logger();
        if logger.enabled(LogLevel::Debug) {
            let data = serde_json::from_slice::<Value>(body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));
            logger.debug(
                "Stedi API response",
                Some(&json!({ "status": resp.status.as_u16(), "data": data })),
            );
        }

        serde_json::from_slice(body).map_err(|source| Error::Decode {
            status: resp.status,
            method: method.clone(),
            path: url.path().into(),
            request_id: diagnostics::request_id(&resp.headers),
            body_snippet: diagnostics::body_snippet(&resp.body, self.body_snippet, &self.api_key),
            source: Box::new(source),
        })
    }
}

/// Span, timer and in-flight gauge for one outbound call.
pub(crate) struct Observation {
    #[cfg(feature = "metrics")]
    method: Method,
    #[cfg(feature = "metrics")]
    host: Option<String>,
    #[cfg(any(feature = "tracing", feature = "metrics"))]
    start: std::time::Instant,
    #[cfg(feature = "tracing")]
    pub(crate) span: tracing::Span,
    #[cfg(feature = "metrics")]
    _inflight: crate::transport::metrics::InFlightGuard,
}

impl Observation {
    #[cfg_attr(
        not(any(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    pub(crate) fn start(req: &TransportRequest) -> Self {
        Self {
            #[cfg(feature = "metrics")]
            method: req.method.clone(),
            #[cfg(feature = "metrics")]
            host: req.url.host_str().map(str::to_owned),
            #[cfg(any(feature = "tracing", feature = "metrics"))]
            start: std::time::Instant::now(),
            #[cfg(feature = "tracing")]
            span: tracing::info_span!(
                "stedi.request",
                http.method = %req.method,
                http.host = %req.url.host_str().unwrap_or_default(),
                http.path = %req.url.path(),
                http.status = field::Empty,
                request_id = field::Empty,
                latency_ms = field::Empty,
                error_kind = field::Empty,
            ),
            #[cfg(feature = "metrics")]
            _inflight: crate::transport::metrics::InFlightGuard::new(),
        }
    }

    #[cfg_attr(
        not(any(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    pub(crate) fn finish(self, result: &Result<TransportResponse, Error>) {
        #[cfg(any(feature = "tracing", feature = "metrics"))]
        {
            let (status, error_kind): (Option<StatusCode>, Option<ErrorKind>) = match result {
                Ok(resp) => (Some(resp.status), None),
                Err(err) => (err.status(), Some(err.kind())),
            };

            #[cfg(feature = "tracing")]
            {
                let latency_ms = i64::try_from(self.start.elapsed().as_millis()).unwrap_or(i64::MAX);
                self.span.record("latency_ms", latency_ms);
                if let Some(status) = status {
                    self.span.record("http.status", i64::from(status.as_u16()));
                }
                let request_id = match result {
                    Ok(resp) => diagnostics::request_id(&resp.headers),
                    Err(err) => err.request_id().map(Into::into),
                };
                if let Some(rid) = request_id.as_deref() {
                    self.span.record("request_id", field::display(rid));
                }
                if let Some(kind) = error_kind {
                    self.span.record("error_kind", field::debug(kind));
                }
            }

            #[cfg(feature = "metrics")]
            crate::transport::metrics::record(&crate::transport::metrics::Outcome {
                method: &self.method,
                host: self.host.as_deref(),
                status,
                latency: self.start.elapsed(),
                error_kind,
            });
        }
    }
}
