use crate::{Error, Payer, PayerList, PayerSearchResults, QueryParams, RequestOptions};
use http::Method;

/// Payer network APIs (healthcare API).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct PayersService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl PayersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /payers`, returning the unwrapped `items`.
    pub async fn get(&self) -> Result<Vec<Payer>, Error> {
        let base = &self.client.base_urls().healthcare;
        let list: PayerList = self
            .client
            .request(base, Method::GET, "/payers", RequestOptions::new())
            .await?;
        Ok(list.items)
    }

    /// `GET /payers/search`, returning the payer of every hit in order.
    ///
    /// Sequence values in `query` are sent as repeated keys.
    pub async fn search(&self, query: QueryParams) -> Result<Vec<Payer>, Error> {
        let base = &self.client.base_urls().healthcare;
        let results: PayerSearchResults = self
            .client
            .request(base, Method::GET, "/payers/search", RequestOptions::new().query(query))
            .await?;
        Ok(results.items.into_iter().map(|hit| hit.payer).collect())
    }
}

/// Payer network APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingPayersService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingPayersService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /payers`, returning the unwrapped `items`.
    pub fn get(&self) -> Result<Vec<Payer>, Error> {
        let base = &self.client.base_urls().healthcare;
        let list: PayerList =
            self.client
                .request(base, Method::GET, "/payers", RequestOptions::new())?;
        Ok(list.items)
    }

    /// `GET /payers/search`, returning the payer of every hit in order.
    pub fn search(&self, query: QueryParams) -> Result<Vec<Payer>, Error> {
        let base = &self.client.base_urls().healthcare;
        let results: PayerSearchResults = self.client.request(
            base,
            Method::GET,
            "/payers/search",
            RequestOptions::new().query(query),
        )?;
        Ok(results.items.into_iter().map(|hit| hit.payer).collect())
    }
}
