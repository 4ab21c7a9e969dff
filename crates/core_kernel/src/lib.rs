//! Core Kernel - Foundational types for the brokerage back office
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Access roles and actor tags supplied by the login gate
//! - File attachment metadata validation shared by all upload paths

pub mod access;
pub mod files;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use access::{Actor, Role};
pub use files::{FileError, FileReference, MediaType, MAX_ATTACHMENT_BYTES};
pub use identifiers::{AttachmentId, ClaimId, ClientId, ContractId, PaymentId};
pub use money::{Currency, Money, MoneyError};
pub use ports::PortError;
