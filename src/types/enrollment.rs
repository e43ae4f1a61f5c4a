//! Transaction enrollment models.

use super::common::{Contact, EnrollmentId, ProviderId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Canceled,
    Draft,
    Live,
    Provisioning,
    Rejected,
    Submitted,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentSource {
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "UI")]
    Ui,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrollmentTransaction {
    ClaimPayment,
    ClaimStatus,
    ClaimSubmission,
    CoordinationOfBenefits,
    EligibilityCheck,
}

/// Body of `POST /enrollments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub payer: PayerRef,
    pub primary_contact: Contact,
    pub provider: ProviderRef,
    pub source: EnrollmentSource,
    pub status: EnrollmentStatus,
    pub transactions: EnrolledTransactions,
    pub user_email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerRef {
    pub id_or_alias: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRef {
    pub id: ProviderId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledTransactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_payment: Option<EnrollFlag>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollFlag {
    pub enroll: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<EnrollmentDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<EnrollmentHistoryItem>>,
    pub id: EnrollmentId,
    pub payer: EnrolledPayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<PrimaryContact>,
    pub provider: EnrolledProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub status: EnrollmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_last_updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<EnrollmentTask>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<EnrolledTransactions>,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledPayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stedi_payer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_payer_id_or_alias: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledProvider {
    pub id: ProviderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id_type: Option<String>,
}

/// Contact as echoed back on an enrollment; every field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryContact {
    pub city: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub street_address1: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDocument {
    pub created_at: String,
    pub enrollment_id: EnrollmentId,
    pub id: String,
    pub name: String,
    pub status: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentHistoryItem {
    pub changed_at: String,
    pub changed_by: String,
    pub new_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentTask {
    #[serde(default)]
    pub definition: TaskDefinition,
    pub id: String,
    pub is_complete: bool,
    pub rank: i64,
    pub responsible_party: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_instructions: Option<FollowInstructions>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowInstructions {
    pub instructions: String,
}

/// Query of `GET /enrollments`.
///
/// List fields are sent as repeated keys (`status=LIVE&status=DRAFT`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnrollmentsParams {
    /// ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,
    /// ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<String>,
    /// Fuzzy match on provider name, NPI, tax id or Stedi payer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Id of a CSV bulk import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payer_ids: Vec<String>,
    /// Exact, case-sensitive names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_npis: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_tax_ids: Vec<String>,
    /// `property:direction`, e.g. `updatedAt:desc`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort_by: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<EnrollmentSource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<EnrollmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_updated_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_updated_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<EnrollmentTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryParams;

    #[test]
    fn list_params_flatten_to_repeated_keys() {
        let params = ListEnrollmentsParams {
            page_size: Some(10),
            status: vec![EnrollmentStatus::Live, EnrollmentStatus::Draft],
            transactions: vec![EnrollmentTransaction::ClaimPayment],
            sources: vec![EnrollmentSource::Api],
            ..Default::default()
        };

        let pairs = QueryParams::from_serialize(&params).unwrap().to_pairs();

        assert_eq!(
            pairs,
            vec![
                ("pageSize".to_owned(), "10".to_owned()),
                ("sources".to_owned(), "API".to_owned()),
                ("status".to_owned(), "LIVE".to_owned()),
                ("status".to_owned(), "DRAFT".to_owned()),
                ("transactions".to_owned(), "claimPayment".to_owned()),
            ]
        );
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let status: EnrollmentStatus = serde_json::from_str(r#""PAUSED""#).unwrap();
        assert_eq!(status, EnrollmentStatus::Unknown);
    }
}
