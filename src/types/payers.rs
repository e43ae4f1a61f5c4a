//! Payer network models.

use serde::{Deserialize, Serialize};

/// A payer supported by Stedi.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_types: Option<Vec<String>>,
    pub display_name: String,
    #[serde(default)]
    pub names: Vec<String>,
    pub primary_payer_id: String,
    pub stedi_id: String,
    #[serde(default)]
    pub transaction_support: TransactionSupport,
}

/// Support level per transaction type, e.g. `SUPPORTED` or `ENROLLMENT_REQUIRED`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionSupport {
    pub claim_payment: String,
    pub claim_status: String,
    pub claim_submission: String,
    pub coordination_of_benefits: String,
    pub eligibility_check: String,
    pub institutional_claim_submission: String,
    pub professional_claim_submission: String,
}

/// Body of `GET /payers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerList {
    pub items: Vec<Payer>,
}

/// Body of `GET /payers/search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayerSearchResults {
    pub items: Vec<PayerSearchHit>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayerSearchHit {
    pub payer: Payer,
    #[serde(default)]
    pub score: f64,
}
