//! Billing domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{FileError, Money, PortError, Role};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Paid amount {amount} does not match the required premium {required}")]
    AmountMismatch { amount: Money, required: Money },

    #[error("Payment date {paid_at} is in the future")]
    FuturePaymentDate { paid_at: NaiveDate },

    #[error("A proof of payment document is required")]
    MissingProof,

    #[error("Invalid proof of payment: {0}")]
    InvalidProof(#[from] FileError),

    #[error("Payment is already approved")]
    AlreadyApproved,

    #[error("Role {0} is not permitted to approve payments")]
    Forbidden(Role),

    #[error("Payment not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<PortError> for PaymentError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => PaymentError::NotFound(id),
            // A stale status on commit means another reviewer approved the
            // payment between our read and our write.
            PortError::StaleState { .. } => PaymentError::AlreadyApproved,
            other => PaymentError::Store(other.to_string()),
        }
    }
}
