use crate::{
    Error, ListProvidersParams, NewProvider, Page, Provider, ProviderId, ProviderSummary,
    QueryParams, RequestOptions,
};
use http::Method;

/// Provider record APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct ProviderService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl ProviderService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `POST /providers`
    pub async fn create(&self, input: &NewProvider) -> Result<Provider, Error> {
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::POST, "/providers", RequestOptions::new().json(input)?)
            .await
    }

    /// `GET /providers/<id>`
    pub async fn get(&self, id: impl Into<ProviderId>) -> Result<Provider, Error> {
        let id = id.into();
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(
                base,
                Method::GET,
                &format!("/providers/{id}"),
                RequestOptions::new(),
            )
            .await
    }

    /// `GET /providers`
    pub async fn list(&self, params: &ListProvidersParams) -> Result<Page<ProviderSummary>, Error> {
        let query = QueryParams::from_serialize(params)?;
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::GET, "/providers", RequestOptions::new().query(query))
            .await
    }
}

/// Provider record APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingProviderService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingProviderService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `POST /providers`
    pub fn create(&self, input: &NewProvider) -> Result<Provider, Error> {
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::POST, "/providers", RequestOptions::new().json(input)?)
    }

    /// `GET /providers/<id>`
    pub fn get(&self, id: impl Into<ProviderId>) -> Result<Provider, Error> {
        let id = id.into();
        let base = &self.client.base_urls().enrollments;
        self.client.request(
            base,
            Method::GET,
            &format!("/providers/{id}"),
            RequestOptions::new(),
        )
    }

    /// `GET /providers`
    pub fn list(&self, params: &ListProvidersParams) -> Result<Page<ProviderSummary>, Error> {
        let query = QueryParams::from_serialize(params)?;
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::GET, "/providers", RequestOptions::new().query(query))
    }
}
