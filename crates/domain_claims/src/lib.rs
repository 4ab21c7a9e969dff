//! Claims Domain
//!
//! A claim is a client's request for reimbursement of a medical expense
//! against an active contract. The lifecycle is deliberately small:
//!
//! ```text
//! Pending -> Approved
//!         -> Rejected
//! ```
//!
//! Both outcomes are terminal; a resolved claim can never be reopened or
//! re-reviewed. Submission validates the expense date, the amount against
//! the plan's fixed reimbursable tiers, and every attachment's metadata.

pub mod claim;
pub mod error;
pub mod ports;

pub use claim::{Claim, ClaimStatus, ClaimSubmission, ExpenseType, ReviewDecision};
pub use error::ClaimError;
pub use ports::ClaimStore;
