use super::{TransportRequest, TransportResponse};
use crate::error::{Error, TransportErrorKind};
use http::{HeaderMap, Method};
use std::{sync::Arc, time::Duration};
use ureq::{
    Agent, RequestBuilder,
    typestate::{WithBody, WithoutBody},
};

/// Trait implemented by any blocking HTTP layer.
pub trait BlockingTransport: Send + Sync + 'static {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynBlockingTransport = Arc<dyn BlockingTransport>;

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req)
    }
}

/// Default blocking transport built on `ureq`.
#[derive(Clone)]
pub struct UreqBlocking {
    agent: Agent,
}

impl UreqBlocking {
    /// Construct a new transport.
    ///
    /// * See [`crate::transport::async_transport::ReqwestAsync::try_new`] for parameter meaning.
    /// * `read_timeout` – timeout for receiving the response body.
    pub fn try_new(
        insecure: bool,
        ua: &str,
        timeout: Duration,
        connect_timeout: Duration,
        read_timeout: Duration,
        no_proxy: bool,
    ) -> Result<Self, Error> {
        let mut builder = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .timeout_connect(Some(connect_timeout))
            .timeout_recv_body(Some(read_timeout))
            .user_agent(ua);

        if no_proxy {
            builder = builder.proxy(None);
        }

        if insecure {
            builder = builder.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }

        Ok(Self {
            agent: Agent::new_with_config(builder.build()),
        })
    }
}

fn error_kind(err: &ureq::Error) -> TransportErrorKind {
    match err {
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => TransportErrorKind::Connect,
        ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            TransportErrorKind::Timeout
        }
        ureq::Error::Io(io)
            if matches!(
                io.kind(),
                std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::NotConnected
            ) =>
        {
            TransportErrorKind::Connect
        }
        _ => TransportErrorKind::Other,
    }
}

fn without_body(
    req: RequestBuilder<WithoutBody>,
    headers: &HeaderMap,
    query: &[(String, String)],
    timeout: Duration,
) -> Result<http::Response<ureq::Body>, ureq::Error> {
    let mut req = req.query_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (name, value) in headers {
        req = req.header(name, value);
    }
    req.config().timeout_global(Some(timeout)).build().call()
}

fn with_body(
    req: RequestBuilder<WithBody>,
    headers: &HeaderMap,
    query: &[(String, String)],
    body: Option<Vec<u8>>,
    timeout: Duration,
) -> Result<http::Response<ureq::Body>, ureq::Error> {
    let mut req = req.query_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (name, value) in headers {
        req = req.header(name, value);
    }
    let req = req.config().timeout_global(Some(timeout)).build();
    match body {
        Some(bytes) => req.send(bytes),
        None => req.send_empty(),
    }
}

impl BlockingTransport for UreqBlocking {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let TransportRequest {
            method,
            url,
            mut headers,
            query,
            body,
            timeout,
        } = req;
        let path = url.path().to_string().into_boxed_str();
        let url = url.as_str();

        let map_err = |err: ureq::Error| Error::Transport {
            method: method.clone(),
            path: path.clone(),
            kind: error_kind(&err),
            source: Box::new(err),
        };

        let body = body.map(|body| {
            if let Some(content_type) = body.content_type {
                headers.insert(http::header::CONTENT_TYPE, content_type);
            }
            body.bytes
        });

        let result = match method {
            Method::GET => without_body(self.agent.get(url), &headers, &query, timeout),
            Method::DELETE => without_body(self.agent.delete(url), &headers, &query, timeout),
            Method::HEAD => without_body(self.agent.head(url), &headers, &query, timeout),
            Method::OPTIONS => without_body(self.agent.options(url), &headers, &query, timeout),
            Method::POST => with_body(self.agent.post(url), &headers, &query, body, timeout),
            Method::PUT => with_body(self.agent.put(url), &headers, &query, body, timeout),
            Method::PATCH => with_body(self.agent.patch(url), &headers, &query, body, timeout),
            ref other => {
                return Err(Error::InvalidConfig {
                    message: format!("unsupported HTTP method for blocking client: {other}")
                        .into_boxed_str(),
                    source: None,
                });
            }
        };
        let mut response = result.map_err(map_err)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(map_err)?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
