//! `metrics` series emitted per outbound call.
//!
//! Labels stay low-cardinality: method, API surface (first host label), status
//! class and error kind.

use crate::ErrorKind;
use http::{Method, StatusCode};
use std::time::Duration;

/// Keeps `stedi_sdk_inflight` raised while a call is outstanding.
pub(crate) struct InFlightGuard(metrics::Gauge);

impl InFlightGuard {
    pub(crate) fn new() -> Self {
        let gauge = metrics::gauge!("stedi_sdk_inflight");
        gauge.increment(1.0);
        Self(gauge)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.decrement(1.0);
    }
}

/// One finished call, as seen by the metrics layer.
pub(crate) struct Outcome<'a> {
    pub(crate) method: &'a Method,
    pub(crate) host: Option<&'a str>,
    pub(crate) status: Option<StatusCode>,
    pub(crate) latency: Duration,
    pub(crate) error_kind: Option<ErrorKind>,
}

fn surface(host: Option<&str>) -> &'static str {
    let Some(host) = host else {
        return "none";
    };
    if !(host == "stedi.com" || host.ends_with(".stedi.com")) {
        return "custom";
    }
    match host.split('.').next() {
        Some("core") => "core",
        Some("healthcare") => "healthcare",
        Some("enrollments") => "enrollments",
        _ => "files",
    }
}

fn status_class(status: Option<StatusCode>) -> &'static str {
    match status.map(|s| s.as_u16() / 100) {
        Some(1) => "1xx",
        Some(2) => "2xx",
        Some(3) => "3xx",
        Some(4) => "4xx",
        Some(5) => "5xx",
        Some(_) => "other",
        None => "no_response",
    }
}

fn error_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidUrl => "invalid_url",
        ErrorKind::Api => "api",
        ErrorKind::Transport => "transport",
        ErrorKind::Decode => "decode",
        ErrorKind::InvalidConfig => "invalid_config",
    }
}

pub(crate) fn record(outcome: &Outcome<'_>) {
    let method = metrics::SharedString::from(outcome.method.as_str().to_owned());
    let surface = surface(outcome.host);
    let status_class = status_class(outcome.status);

    metrics::counter!(
        "stedi_sdk_requests_total",
        "method" => method.clone(),
        "surface" => surface,
        "status_class" => status_class
    )
    .increment(1);
    metrics::histogram!(
        "stedi_sdk_request_duration_seconds",
        "method" => method.clone(),
        "surface" => surface
    )
    .record(outcome.latency);

    if let Some(kind) = outcome.error_kind {
        metrics::counter!(
            "stedi_sdk_errors_total",
            "method" => method,
            "surface" => surface,
            "kind" => error_label(kind)
        )
        .increment(1);
    }
}
