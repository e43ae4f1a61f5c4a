use crate::{
    Error, ListTransactionsParams, Page, QueryParams, RequestOptions, SearchTransactionsParams,
    Transaction, TransactionId,
};
use http::Method;

/// Processed transaction APIs (core platform).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct TransactionsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl TransactionsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /transactions/<id>`
    pub async fn get(&self, id: impl Into<TransactionId>) -> Result<Transaction, Error> {
        let id = id.into();
        let base = &self.client.base_urls().core;
        self.client
            .request(
                base,
                Method::GET,
                &format!("/transactions/{id}"),
                RequestOptions::new(),
            )
            .await
    }

    /// `GET /transactions`
    pub async fn list(&self, params: &ListTransactionsParams) -> Result<Page<Transaction>, Error> {
        self.query(QueryParams::from_serialize(params)?).await
    }

    /// `GET /transactions?businessIdentifier=<value>`
    pub async fn search(
        &self,
        params: &SearchTransactionsParams,
    ) -> Result<Page<Transaction>, Error> {
        self.query(QueryParams::from_serialize(params)?).await
    }

    async fn query(&self, query: QueryParams) -> Result<Page<Transaction>, Error> {
        let base = &self.client.base_urls().core;
        self.client
            .request(base, Method::GET, "/transactions", RequestOptions::new().query(query))
            .await
    }
}

/// Processed transaction APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingTransactionsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingTransactionsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /transactions/<id>`
    pub fn get(&self, id: impl Into<TransactionId>) -> Result<Transaction, Error> {
        let id = id.into();
        let base = &self.client.base_urls().core;
        self.client.request(
            base,
            Method::GET,
            &format!("/transactions/{id}"),
            RequestOptions::new(),
        )
    }

    /// `GET /transactions`
    pub fn list(&self, params: &ListTransactionsParams) -> Result<Page<Transaction>, Error> {
        self.query(QueryParams::from_serialize(params)?)
    }

    /// `GET /transactions?businessIdentifier=<value>`
    pub fn search(&self, params: &SearchTransactionsParams) -> Result<Page<Transaction>, Error> {
        self.query(QueryParams::from_serialize(params)?)
    }

    fn query(&self, query: QueryParams) -> Result<Page<Transaction>, Error> {
        let base = &self.client.base_urls().core;
        self.client
            .request(base, Method::GET, "/transactions", RequestOptions::new().query(query))
    }
}
