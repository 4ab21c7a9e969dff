//! Claims domain errors
//!
//! Validation failures point at the offending field, `Forbidden` is an
//! authorization failure, and `AlreadyResolved` signals a stale view that
//! a refetch repairs.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{FileError, Money, PortError, Role};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Expense date {expense_date} is in the future")]
    FutureExpenseDate { expense_date: NaiveDate },

    #[error("Amount {amount} is not one of the plan's reimbursable tiers")]
    AmountNotAllowed { amount: Money },

    #[error("No active contract for this claim: {0}")]
    NoActiveContract(String),

    #[error("Unsupported attachment: {0}")]
    UnsupportedAttachment(#[from] FileError),

    #[error("Claim is already resolved")]
    AlreadyResolved,

    #[error("Role {0} is not permitted to review claims")]
    Forbidden(Role),

    #[error("Claim not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<PortError> for ClaimError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => ClaimError::NotFound(id),
            // A stale status on commit means another reviewer resolved the
            // claim between our read and our write.
            PortError::StaleState { .. } => ClaimError::AlreadyResolved,
            other => ClaimError::Store(other.to_string()),
        }
    }
}
