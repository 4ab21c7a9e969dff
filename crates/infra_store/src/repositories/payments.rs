//! Payment store adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{PaymentId, PortError};
use domain_billing::payment::{Payment, PaymentFilter, PaymentStatus};
use domain_billing::ports::PaymentStore;

/// In-memory payment store
///
/// Approval is guarded by the expected Pending status, so two racing
/// approvals commit exactly one state change and the loser sees
/// `PortError::StaleState`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<PaymentId, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment: Payment) -> Result<(), PortError> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.id) {
            return Err(PortError::duplicate("payment", payment.id));
        }
        debug!(payment_id = %payment.id, "inserting payment");
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get(&self, id: PaymentId) -> Result<Payment, PortError> {
        self.payments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("payment", id))
    }

    async fn update(
        &self,
        payment: Payment,
        expected_status: PaymentStatus,
    ) -> Result<(), PortError> {
        let mut payments = self.payments.write().await;
        let stored = payments
            .get(&payment.id)
            .ok_or_else(|| PortError::not_found("payment", payment.id))?;
        if stored.status != expected_status {
            return Err(PortError::stale("payment", payment.id));
        }
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn list(&self, filter: PaymentFilter) -> Result<Vec<Payment>, PortError> {
        let payments = self.payments.read().await;
        let mut matching: Vec<Payment> = payments
            .values()
            .filter(|payment| filter.matches(payment))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(matching)
    }
}
