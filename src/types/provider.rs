//! Provider records used by enrollments.

use super::common::{Contact, ProviderId};
use serde::{Deserialize, Serialize};

/// Body of `POST /providers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub contacts: Vec<Contact>,
    pub name: String,
    pub npi: String,
    pub tax_id: String,
    /// `EIN` or `SSN`.
    pub tax_id_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub created_at: String,
    pub id: ProviderId,
    pub name: String,
    pub npi: String,
    pub tax_id: String,
    pub tax_id_type: String,
    pub updated_at: String,
}

/// Entry of `GET /providers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    pub id: ProviderId,
    pub name: String,
    pub npi: String,
    pub tax_id: String,
    pub tax_id_type: String,
}

/// Query of `GET /providers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProvidersParams {
    /// Fuzzy match on provider name, NPI or tax id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// 1..=500, server default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_npis: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_tax_ids: Vec<String>,
}
