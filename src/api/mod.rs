//! High-level Stedi API services.
//!
//! Services are reached through accessors on the clients, e.g.
//! `Client::payers()` / `BlockingClient::payers()`.

pub mod eligibility;
pub mod enrollment;
pub mod payers;
pub mod provider;
pub mod transactions;

pub use eligibility::*;
pub use enrollment::*;
pub use payers::*;
pub use provider::*;
pub use transactions::*;
