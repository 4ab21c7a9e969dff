//! Claim store adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ClaimId, ClientId, PortError};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::ports::ClaimStore;

/// In-memory claim store
///
/// A claim carries its attachment references inline, so inserts are
/// naturally atomic: no stored claim ever lacks its documents. Updates use
/// the expected-status guard to give concurrent reviewers a single winner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClaimStore {
    claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn insert(&self, claim: Claim) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;
        if claims.contains_key(&claim.id) {
            return Err(PortError::duplicate("claim", claim.id));
        }
        debug!(claim_id = %claim.id, attachments = claim.attachments.len(), "inserting claim");
        claims.insert(claim.id, claim);
        Ok(())
    }

    async fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.claims
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("claim", id))
    }

    async fn update(&self, claim: Claim, expected_status: ClaimStatus) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;
        let stored = claims
            .get(&claim.id)
            .ok_or_else(|| PortError::not_found("claim", claim.id))?;
        if stored.status != expected_status {
            return Err(PortError::stale("claim", claim.id));
        }
        claims.insert(claim.id, claim);
        Ok(())
    }

    async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        let mut matching: Vec<Claim> = claims
            .values()
            .filter(|claim| claim.client_id == client_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(matching)
    }

    async fn list_pending(&self) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        let mut pending: Vec<Claim> = claims
            .values()
            .filter(|claim| claim.status == ClaimStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_kernel::{ContractId, Currency, Money, Role};
    use domain_claims::claim::{ClaimSubmission, ExpenseType, ReviewDecision};
    use rust_decimal_macros::dec;

    fn allowed_amounts() -> Vec<Money> {
        vec![
            Money::new(dec!(69), Currency::USD),
            Money::new(dec!(120), Currency::USD),
        ]
    }

    fn claim_for(client_id: ClientId) -> Claim {
        let submission = ClaimSubmission {
            expense_date: Utc::now().date_naive(),
            expense_type: ExpenseType::Consultation,
            amount: Money::new(dec!(69), Currency::USD),
            description: Some("General consultation".to_string()),
            attachments: vec![],
        };
        Claim::submit(ContractId::new(), client_id, submission, &allowed_amounts()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryClaimStore::new();
        let claim = claim_for(ClientId::new());
        store.insert(claim.clone()).await.unwrap();

        let fetched = store.get(claim.id).await.unwrap();
        assert_eq!(fetched, claim);
    }

    #[tokio::test]
    async fn test_concurrent_reviews_have_one_winner() {
        let store = InMemoryClaimStore::new();
        let claim = claim_for(ClientId::new());
        store.insert(claim.clone()).await.unwrap();

        let mut approved = claim.clone();
        approved.review(ReviewDecision::Approve, Role::Agent).unwrap();
        let mut rejected = claim;
        rejected.review(ReviewDecision::Reject, Role::Admin).unwrap();

        store.update(approved, ClaimStatus::Pending).await.unwrap();
        let second = store.update(rejected, ClaimStatus::Pending).await;
        assert!(matches!(second, Err(PortError::StaleState { .. })));
    }

    #[tokio::test]
    async fn test_list_for_client_newest_first() {
        let store = InMemoryClaimStore::new();
        let client_id = ClientId::new();
        let first = claim_for(client_id);
        let second = claim_for(client_id);
        store.insert(first.clone()).await.unwrap();
        store.insert(second.clone()).await.unwrap();
        store.insert(claim_for(ClientId::new())).await.unwrap();

        let listed = store.list_for_client(client_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].submitted_at >= listed[1].submitted_at);
    }

    #[tokio::test]
    async fn test_list_pending_excludes_resolved_and_orders_oldest_first() {
        let store = InMemoryClaimStore::new();
        let oldest = claim_for(ClientId::new());
        let newest = claim_for(ClientId::new());
        let mut resolved = claim_for(ClientId::new());
        resolved.review(ReviewDecision::Approve, Role::Agent).unwrap();

        store.insert(newest.clone()).await.unwrap();
        store.insert(oldest.clone()).await.unwrap();
        store.insert(resolved).await.unwrap();

        let pending = store.list_pending().await.unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending[0].submitted_at <= pending[1].submitted_at);
    }
}
