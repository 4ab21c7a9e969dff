//! Payment store port

use async_trait::async_trait;

use core_kernel::{PaymentId, PortError};

use crate::payment::{Payment, PaymentFilter, PaymentStatus};

/// Persistence operations for premium payments
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts a new payment record with its proof reference
    async fn insert(&self, payment: Payment) -> Result<(), PortError>;

    /// Fetches a payment by id
    async fn get(&self, id: PaymentId) -> Result<Payment, PortError>;

    /// Replaces a payment, guarded by the status the caller observed
    ///
    /// Returns `PortError::StaleState` when the stored status differs, so
    /// two racing approvals apply exactly one state change.
    async fn update(&self, payment: Payment, expected_status: PaymentStatus) -> Result<(), PortError>;

    /// Lists payments matching the filter, newest recorded first
    async fn list(&self, filter: PaymentFilter) -> Result<Vec<Payment>, PortError>;
}
