//! Contract Domain
//!
//! The contract is the aggregate the rest of the back office hangs off:
//! claims and payments both resolve to an existing contract. This crate
//! owns plan definitions (Health and Life with their premium and
//! reimbursable tiers), the contract lifecycle state machine
//! (Pending -> Active -> Expired), and beneficiary allocation for Life
//! contracts.
//!
//! # Invariants
//!
//! - A Life contract owns at least one beneficiary and the declared
//!   percentages sum to exactly 100
//! - A Health contract owns no beneficiaries
//! - Status only moves Pending -> Active (first approved payment) and
//!   Active -> Expired (missed payment, decided outside this crate)

pub mod beneficiary;
pub mod contract;
pub mod error;
pub mod plan;
pub mod ports;

pub use beneficiary::{allocated_percentage, validate_allocation, AllocationError, Beneficiary, Relationship};
pub use contract::{Contract, ContractFilter, ContractStatus};
pub use error::ContractError;
pub use plan::PlanType;
pub use ports::ContractStore;
