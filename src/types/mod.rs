//! Request/response models for the Stedi APIs.

pub mod common;
pub mod eligibility;
pub mod enrollment;
pub mod payers;
pub mod provider;
pub mod transactions;

pub use common::*;
pub use eligibility::{
    DEFAULT_SERVICE_TYPE_CODES, EligibilityCheck, EligibilityMember, EligibilityProvider,
    EligibilityResponse, Encounter,
};
pub use enrollment::*;
pub use payers::*;
pub use provider::*;
pub use transactions::*;
