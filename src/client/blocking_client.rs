//! High-level blocking Stedi client.

use super::shared::{DEFAULT_USER_AGENT, Observation, Shared};
use crate::{
    ApiKey, BaseUrls, BodySnippetConfig, Downloaded, Error, Logger, RequestOptions, api,
    transport::{
        TransportRequest, TransportResponse,
        blocking_transport::{BlockingTransport, DynBlockingTransport, UreqBlocking},
    },
};
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    api_key: ApiKey,
    base_urls: BaseUrls,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    read_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    logger: Option<Arc<dyn Logger>>,
    transport: Option<DynBlockingTransport>,
}

impl BlockingClientBuilder {
    fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_urls: BaseUrls::default(),
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            no_proxy: false,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
            logger: None,
            transport: None,
        }
    }

    pub fn base_urls(mut self, base_urls: BaseUrls) -> Self {
        self.base_urls = base_urls;
        self
    }

    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.read_timeout = value;
        self
    }

    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.body_snippet.enabled = enabled;
        self
    }

    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.body_snippet.max_bytes = max_bytes;
        self
    }

    /// Use this logger instead of the process-wide one.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Send requests through a custom transport instead of `ureq`.
    pub fn transport(mut self, transport: impl BlockingTransport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<BlockingClient, Error> {
        self.base_urls.validate()?;

        let transport: DynBlockingTransport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(UreqBlocking::try_new(
                self.insecure,
                &self.user_agent,
                self.timeout,
                self.connect_timeout,
                self.read_timeout,
                self.no_proxy,
            )?),
        };

        Ok(BlockingClient {
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

/// Blocking Stedi API client. Cheap to clone.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

struct Inner {
    shared: Shared,
    transport: DynBlockingTransport,
}

impl BlockingClient {
    pub fn builder(api_key: impl Into<ApiKey>) -> BlockingClientBuilder {
        BlockingClientBuilder::new(api_key.into())
    }

    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, Error> {
        Self::builder(api_key).build()
    }

    #[must_use]
    pub fn base_urls(&self) -> &BaseUrls {
        &self.inner.shared.base_urls
    }

    #[must_use]
    pub fn eligibility(&self) -> api::BlockingEligibilityService {
        api::BlockingEligibilityService::new(self.clone())
    }

    #[must_use]
    pub fn enrollment(&self) -> api::BlockingEnrollmentService {
        api::BlockingEnrollmentService::new(self.clone())
    }

    #[must_use]
    pub fn payers(&self) -> api::BlockingPayersService {
        api::BlockingPayersService::new(self.clone())
    }

    #[must_use]
    pub fn provider(&self) -> api::BlockingProviderService {
        api::BlockingProviderService::new(self.clone())
    }

    #[must_use]
    pub fn transactions(&self) -> api::BlockingTransactionsService {
        api::BlockingTransactionsService::new(self.clone())
    }

    /// Blocking counterpart of [`crate::Client::request`].
    pub fn request<T: DeserializeOwned>(
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
        let resp = self.execute(req)?;
        self.inner.shared.decode(&method, &url, &resp)
    }

    /// Blocking counterpart of [`crate::Client::download_file`].
    pub fn download_file(&self, url: &str) -> Result<Downloaded, Error> {
        let req = self.inner.shared.prepare_download(url)?;
        let resp = self.execute(req)?;
        Ok(Downloaded::from_bytes(resp.body))
    }

    fn execute(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let observation = Observation::start(&req);
        #[cfg(feature = "tracing")]
        let _entered = observation.span.clone().entered();
        let (method, url) = (req.method.clone(), req.url.clone());

        let result = self
            .inner
            .transport
            .send(req)
            .and_then(|resp| self.inner.shared.check_status(&method, &url, resp));

        observation.finish(&result);
        result
    }
}
