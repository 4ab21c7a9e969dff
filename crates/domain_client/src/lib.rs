//! Client Domain
//!
//! Clients are the people who contract policies, submit reimbursement
//! claims, and upload premium payments. This crate owns the client entity
//! and the identity rules enforced at registration: a numeric national id
//! of 8-10 digits, a 10-digit mobile phone starting with 3, a well-formed
//! email, and a date of birth in the past.

pub mod client;
pub mod error;
pub mod ports;
pub mod validation;

pub use client::{Client, ClientProfile};
pub use error::ClientError;
pub use ports::ClientStore;
pub use validation::{ClientValidator, ValidationResult};
