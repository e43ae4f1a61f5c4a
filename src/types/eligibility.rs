//! Real-time eligibility check (270/271) models.

use super::common::{Address, ErrorDetail};
use serde::{Deserialize, Serialize};

/// Service type codes requested when the caller does not choose any.
pub const DEFAULT_SERVICE_TYPE_CODES: [&str; 10] =
    ["27", "28", "30", "35", "36", "37", "38", "39", "40", "41"];

/// Body of `POST /change/medicalnetwork/eligibility/v3`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCheck {
    pub control_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependents: Option<Vec<EligibilityMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Encounter>,
    pub provider: EligibilityProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<EligibilityMember>,
    pub trading_partner_name: String,
    pub trading_partner_service_id: String,
}

impl EligibilityCheck {
    /// Copy of the check with `encounter.serviceTypeCodes` set to
    /// [`DEFAULT_SERVICE_TYPE_CODES`] unless codes are already present.
    /// Other encounter fields are kept.
    #[must_use]
    pub fn with_default_service_types(&self) -> Self {
        let mut check = self.clone();
        let encounter = check.encounter.get_or_insert_with(Encounter::default);
        if encounter.service_type_codes.as_ref().is_none_or(Vec::is_empty) {
            encounter.service_type_codes = Some(
                DEFAULT_SERVICE_TYPE_CODES
                    .iter()
                    .map(|code| (*code).to_owned())
                    .collect(),
            );
        }
        check
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_codes: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityProvider {
    pub npi: String,
    pub organization_name: String,
}

/// Subscriber or dependent identification sent with a check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityMember {
    pub date_of_birth: String,
    pub first_name: String,
    pub last_name: String,
    pub member_id: String,
}

/// Parsed 271 response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityResponse {
    pub benefits_information: Vec<BenefitsInformation>,
    pub control_number: String,
    pub dependents: Option<Vec<Dependent>>,
    pub eligibility_search_id: String,
    pub errors: Vec<ErrorDetail>,
    pub meta: Meta,
    pub payer: Payer,
    pub plan_date_information: PlanInformation,
    pub plan_information: PlanInformation,
    pub plan_status: Option<Vec<PlanStatus>>,
    pub provider: ResponseProvider,
    pub reassociation_key: String,
    pub subscriber: Subscriber,
    pub trading_partner_service_id: String,
    pub x12: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsInformation {
    pub additional_information: Option<Vec<AdditionalInformation>>,
    pub auth_or_cert_indicator: Option<String>,
    pub benefit_amount: Option<String>,
    pub benefit_percent: Option<String>,
    pub benefit_quantity: Option<String>,
    pub benefits_service_delivery: Option<Vec<BenefitsServiceDelivery>>,
    pub code: Option<String>,
    pub coverage_level: Option<String>,
    pub coverage_level_code: Option<String>,
    pub id: Option<String>,
    pub in_plan_network_indicator: Option<String>,
    pub in_plan_network_indicator_code: Option<String>,
    pub insurance_type: Option<String>,
    pub insurance_type_code: Option<String>,
    pub name: Option<String>,
    pub plan_coverage: Option<String>,
    pub quantity_qualifier: Option<String>,
    pub quantity_qualifier_code: Option<String>,
    pub service_type_codes: Option<Vec<String>>,
    pub service_types: Option<Vec<String>>,
    pub time_qualifier: Option<String>,
    pub time_qualifier_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInformation {
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsServiceDelivery {
    pub quantity: Option<String>,
    pub quantity_qualifier: Option<String>,
    pub quantity_qualifier_code: Option<String>,
    pub sample_selection_modulus: Option<String>,
    pub unit_for_measurement_code: Option<String>,
    pub unit_for_measurement_qualifier: Option<String>,
    pub unit_for_measurement_qualifier_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dependent {
    pub address: Option<Address>,
    pub date_of_birth: Option<String>,
    pub entity_type: Option<String>,
    pub first_name: Option<String>,
    pub gender: Option<String>,
    pub group_number: Option<String>,
    pub insured_indicator: Option<String>,
    pub last_name: Option<String>,
    pub maintenance_reason_code: Option<String>,
    pub maintenance_type_code: Option<String>,
    pub middle_name: Option<String>,
    pub relation_to_subscriber: Option<String>,
    pub relation_to_subscriber_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub application_mode: String,
    pub outbound_trace_id: String,
    pub sender_id: String,
    pub submitter_id: String,
    pub trace_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payer {
    pub contact_information: Option<ContactInformation>,
    pub entity_identifier: Option<String>,
    pub entity_type: Option<String>,
    pub federal_taxpayers_id_number: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInformation {
    pub contacts: Option<Vec<CommunicationContact>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunicationContact {
    pub communication_mode: Option<String>,
    pub communication_number: Option<String>,
}

/// Plan and plan-date information share one shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanInformation {
    pub eligibility_begin: Option<String>,
    pub group_description: Option<String>,
    pub group_number: Option<String>,
    pub plan_begin: Option<String>,
    pub plan_end: Option<String>,
    pub plan_network_id_description: Option<String>,
    pub plan_network_id_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanStatus {
    pub plan_details: Option<String>,
    pub service_type_codes: Option<Vec<String>>,
    pub status: Option<String>,
    pub status_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseProvider {
    pub entity_identifier: String,
    pub entity_type: String,
    pub npi: String,
    pub provider_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscriber {
    pub address: Option<Address>,
    pub date_of_birth: Option<String>,
    pub entity_identifier: Option<String>,
    pub entity_type: Option<String>,
    pub first_name: Option<String>,
    pub gender: Option<String>,
    pub group_description: Option<String>,
    pub group_number: Option<String>,
    pub last_name: Option<String>,
    pub member_id: Option<String>,
    pub plan_network_description: Option<String>,
    pub plan_network_id_number: Option<String>,
}
