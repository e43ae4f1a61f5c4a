use crate::{EligibilityCheck, EligibilityResponse, Error, RequestOptions};
use http::Method;

const PATH: &str = "/change/medicalnetwork/eligibility/v3";

/// Real-time eligibility checks (healthcare API).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct EligibilityService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl EligibilityService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `POST /change/medicalnetwork/eligibility/v3`
    ///
    /// Requests [`crate::DEFAULT_SERVICE_TYPE_CODES`] when `input` names none.
    pub async fn check(&self, input: &EligibilityCheck) -> Result<EligibilityResponse, Error> {
        let body = input.with_default_service_types();
        let base = &self.client.base_urls().healthcare;
        self.client
            .request(base, Method::POST, PATH, RequestOptions::new().json(&body)?)
            .await
    }
}

/// Real-time eligibility checks (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingEligibilityService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingEligibilityService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `POST /change/medicalnetwork/eligibility/v3`
    pub fn check(&self, input: &EligibilityCheck) -> Result<EligibilityResponse, Error> {
        let body = input.with_default_service_types();
        let base = &self.client.base_urls().healthcare;
        self.client
            .request(base, Method::POST, PATH, RequestOptions::new().json(&body)?)
    }
}
