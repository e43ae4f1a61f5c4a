//! High-level asynchronous Stedi client.

use super::shared::{DEFAULT_USER_AGENT, Observation, Shared};
use crate::{
    ApiKey, BaseUrls, BodySnippetConfig, Downloaded, Error, Logger, RequestOptions, api,
    transport::{
        TransportRequest, TransportResponse,
        async_transport::{AsyncTransport, DynAsyncTransport, ReqwestAsync},
    },
};
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    api_key: ApiKey,
    base_urls: BaseUrls,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    logger: Option<Arc<dyn Logger>>,
    transport: Option<DynAsyncTransport>,
}

impl ClientBuilder {
    /// Create a builder with opinionated defaults.
    fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_urls: BaseUrls::default(),
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            no_proxy: false,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
            logger: None,
            transport: None,
        }
    }

    /// Override the API surface base URLs.
    pub fn base_urls(mut self, base_urls: BaseUrls) -> Self {
        self.base_urls = base_urls;
        self
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Accept invalid TLS certificates (**dangerous**).
    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Adjust the per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Adjust the connection establishment timeout.
    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    /// Add a default header applied to every request.
    ///
    /// `Authorization` and `Content-Type` are always set by the client.
    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Add a set of default headers applied to every request.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    /// Enable/disable capturing `body_snippet` on errors and decode failures.
    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.body_snippet.enabled = enabled;
        self
    }

    /// Set max bytes to keep for `body_snippet`.
    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.body_snippet.max_bytes = max_bytes;
        self
    }

    /// Use this logger instead of the process-wide one.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Send requests through a custom transport instead of `reqwest`.
    ///
    /// TLS, proxy, user-agent and connect-timeout settings are then ignored.
    pub fn transport(mut self, transport: impl AsyncTransport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Finalise configuration and build the client.
    pub fn build(self) -> Result<Client, Error> {
        self.base_urls.validate()?;

        let transport: DynAsyncTransport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestAsync::try_new(
                self.insecure,
                &self.user_agent,
                self.timeout,
                self.connect_timeout,
                self.no_proxy,
            )?),
        };

        Ok(Client {
            inner: Arc::new(Inner {
                shared: Shared {
                    api_key: self.api_key,
                    base_urls: self.base_urls,
                    timeout: self.timeout,
                    default_headers: self.default_headers,
                    body_snippet: self.body_snippet,
                    logger: self.logger,
                },
                transport,
            }),
        })
    }
}

/// Asynchronous Stedi API client. Cheap to clone.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    shared: Shared,
    transport: DynAsyncTransport,
}

impl Client {
    pub fn builder(api_key: impl Into<ApiKey>) -> ClientBuilder {
        ClientBuilder::new(api_key.into())
    }

    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, Error> {
        Self::builder(api_key).build()
    }

    #[must_use]
    pub fn base_urls(&self) -> &BaseUrls {
        &self.inner.shared.base_urls
    }

    #[must_use]
    pub fn eligibility(&self) -> api::EligibilityService {
        api::EligibilityService::new(self.clone())
    }

    #[must_use]
    pub fn enrollment(&self) -> api::EnrollmentService {
        api::EnrollmentService::new(self.clone())
    }

    #[must_use]
    pub fn payers(&self) -> api::PayersService {
        api::PayersService::new(self.clone())
    }

    #[must_use]
    pub fn provider(&self) -> api::ProviderService {
        api::ProviderService::new(self.clone())
    }

    #[must_use]
    pub fn transactions(&self) -> api::TransactionsService {
        api::TransactionsService::new(self.clone())
    }

    /// Send one authenticated request and decode the JSON body into `T`.
    ///
    /// The URL is `{base_url}/{path}` with a single leading `/` of `path`
    /// dropped. Non-2xx responses become [`Error::Api`]; network failures are
    /// returned as [`Error::Transport`] unchanged.
    pub async fn request<T: DeserializeOwned>(
        &self,
        base_url: &str,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let req = self
            .inner
            .shared
            .prepare_request(base_url, method, path, &options)?;
        let (method, url) = (req.method.clone(), req.url.clone());
        let resp = self.execute(req).await?;
        self.inner.shared.decode(&method, &url, &resp)
    }

    /// Download a file hosted on `stedi.com` or one of its subdomains.
    ///
    /// Any other URL fails with [`Error::InvalidUrl`] before a request is made.
    pub async fn download_file(&self, url: &str) -> Result<Downloaded, Error> {
        let req = self.inner.shared.prepare_download(url)?;
        let resp = self.execute(req).await?;
        Ok(Downloaded::from_bytes(resp.body))
    }

    async fn execute(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let observation = Observation::start(&req);
        let (method, url) = (req.method.clone(), req.url.clone());

        let sent = self.inner.transport.send(req);
        #[cfg(feature = "tracing")]
        let sent = tracing::Instrument::instrument(sent, observation.span.clone());

        let result = match sent.await {
            Ok(resp) => self.inner.shared.check_status(&method, &url, resp),
            Err(err) => Err(err),
        };

        observation.finish(&result);
        result
    }
}
