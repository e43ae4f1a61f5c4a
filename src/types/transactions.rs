//! Processed EDI transaction models (core platform).

use super::common::TransactionId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Inbound,
    Outbound,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionMode {
    Production,
    Test,
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Failed,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_identifiers: Option<Vec<BusinessIdentifier>>,
    pub direction: Direction,
    pub file_execution_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Fragments>,
    pub mode: TransactionMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub partnership: Partnership,
    pub processed_at: String,
    pub status: TransactionStatus,
    pub transaction_id: TransactionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_errors: Option<Vec<TranslationError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x12: Option<X12Info>,
}

impl Transaction {
    /// First artifact with the given usage (`input`, `output` or `metadata`).
    ///
    /// Its `url` can be passed to `download_file`.
    #[must_use]
    pub fn artifact(&self, usage: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.usage == usage)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// MIME type, e.g. `application/edi-x12` or `application/json`.
    pub artifact_type: String,
    /// `execution`, `fault`, `fragment` or `transaction`.
    pub model: String,
    pub size_bytes: u64,
    pub url: String,
    pub usage: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdentifier {
    /// e.g. `BEG-03`.
    pub element: String,
    pub element_id: String,
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragments {
    pub batch_size: u64,
    pub fragment_count: u64,
    pub key_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub partnership_id: String,
    /// `x12` or `edifact`.
    pub partnership_type: String,
    pub receiver: ProfileRef,
    pub sender: ProfileRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRef {
    pub profile_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationError {
    pub context: Option<ErrorContext>,
    pub mark: Option<ErrorMark>,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorContext {
    pub code: Option<String>,
    pub schema_path: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    pub start: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub column: u64,
    pub line: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Info {
    pub metadata: X12Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_setting: Option<TransactionSetting>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionSetting {
    pub guide_id: Option<String>,
    pub transaction_setting_id: Option<String>,
}

/// Envelope values of an X12 document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Metadata {
    pub functional_group: FunctionalGroup,
    pub interchange: Interchange,
    pub receiver: X12Party,
    pub sender: X12Party,
    pub transaction: X12Transaction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalGroup {
    pub control_number: u64,
    pub date: String,
    pub functional_identifier_code: String,
    pub release: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interchange {
    pub acknowledgment_requested_code: String,
    pub control_number: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Party {
    pub application_code: String,
    pub isa: Isa,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Isa {
    pub id: String,
    pub qualifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Transaction {
    pub control_number: String,
    pub transaction_set_identifier: String,
}

/// Query of `GET /transactions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Query of `GET /transactions` narrowed to one business identifier value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTransactionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_decodes_and_finds_artifacts() {
        let tx: Transaction = serde_json::from_value(json!({
            "artifacts": [
                {
                    "artifactType": "application/edi-x12",
                    "model": "transaction",
                    "sizeBytes": 512,
                    "url": "https://core.us.stedi.com/2023-08-01/transactions/tx-1/input",
                    "usage": "input"
                },
                {
                    "artifactType": "application/json",
                    "model": "transaction",
                    "sizeBytes": 2048,
                    "url": "https://core.us.stedi.com/2023-08-01/transactions/tx-1/output",
                    "usage": "output"
                }
            ],
            "direction": "INBOUND",
            "fileExecutionId": "fe-1",
            "mode": "production",
            "partnership": {
                "partnershipId": "p-1",
                "partnershipType": "x12",
                "receiver": {"profileId": "us"},
                "sender": {"profileId": "them"}
            },
            "processedAt": "2024-01-01T00:00:00Z",
            "status": "succeeded",
            "transactionId": "tx-1"
        }))
        .unwrap();

        assert_eq!(tx.direction, Direction::Inbound);
        assert_eq!(tx.status, TransactionStatus::Succeeded);
        assert_eq!(tx.artifact("output").unwrap().size_bytes, 2048);
        assert!(tx.artifact("metadata").is_none());
    }
}
