use crate::{
    Enrollment, EnrollmentId, Error, ListEnrollmentsParams, NewEnrollment, Page, QueryParams,
    RequestOptions,
};
use http::Method;

/// Transaction enrollment APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct EnrollmentService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl EnrollmentService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `POST /enrollments`
    pub async fn create(&self, input: &NewEnrollment) -> Result<Enrollment, Error> {
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::POST, "/enrollments", RequestOptions::new().json(input)?)
            .await
    }

    /// `GET /enrollments/<id>`
    pub async fn get(&self, id: impl Into<EnrollmentId>) -> Result<Enrollment, Error> {
        let id = id.into();
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(
                base,
                Method::GET,
                &format!("/enrollments/{id}"),
                RequestOptions::new(),
            )
            .await
    }

    /// `GET /enrollments`
    pub async fn list(&self, params: &ListEnrollmentsParams) -> Result<Page<Enrollment>, Error> {
        let query = QueryParams::from_serialize(params)?;
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(
                base,
                Method::GET,
                "/enrollments",
                RequestOptions::new().query(query),
            )
            .await
    }
}

/// Transaction enrollment APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingEnrollmentService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingEnrollmentService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `POST /enrollments`
    pub fn create(&self, input: &NewEnrollment) -> Result<Enrollment, Error> {
        let base = &self.client.base_urls().enrollments;
        self.client
            .request(base, Method::POST, "/enrollments", RequestOptions::new().json(input)?)
    }

    /// `GET /enrollments/<id>`
    pub fn get(&self, id: impl Into<EnrollmentId>) -> Result<Enrollment, Error> {
        let id = id.into();
        let base = &self.client.base_urls().enrollments;
        self.client.request(
            base,
            Method::GET,
            &format!("/enrollments/{id}"),
            RequestOptions::new(),
        )
    }

    /// `GET /enrollments`
    pub fn list(&self, params: &ListEnrollmentsParams) -> Result<Page<Enrollment>, Error> {
        let query = QueryParams::from_serialize(params)?;
        let base = &self.client.base_urls().enrollments;
        self.client.request(
            base,
            Method::GET,
            "/enrollments",
            RequestOptions::new().query(query),
        )
    }
}
