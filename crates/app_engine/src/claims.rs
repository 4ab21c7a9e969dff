//! Claim lifecycle service

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{Actor, ClaimId, ClientId, ContractId, PortError};
use domain_claims::claim::{Claim, ClaimSubmission, ReviewDecision};
use domain_claims::error::ClaimError;
use domain_claims::ports::ClaimStore;
use domain_contract::ports::ContractStore;

/// Accepts reimbursement claims and resolves them
pub struct ClaimService {
    claims: Arc<dyn ClaimStore>,
    contracts: Arc<dyn ContractStore>,
}

impl ClaimService {
    pub fn new(claims: Arc<dyn ClaimStore>, contracts: Arc<dyn ContractStore>) -> Self {
        Self { claims, contracts }
    }

    /// Submits a claim against an active contract
    ///
    /// The contract must exist, be Active, and belong to the submitting
    /// client; all three failures collapse into `NoActiveContract` so the
    /// caller learns nothing about other clients' contracts. The claim
    /// amount must be one of the plan's reimbursable tiers.
    #[instrument(skip(self, submission))]
    pub async fn submit_claim(
        &self,
        actor: &Actor,
        contract_id: ContractId,
        submission: ClaimSubmission,
    ) -> Result<Claim, ClaimError> {
        let contract = self.contracts.get(contract_id).await.map_err(|err| match err {
            PortError::NotFound { id, .. } => ClaimError::NoActiveContract(id),
            other => ClaimError::Store(other.to_string()),
        })?;

        if !contract.is_active() || !actor.may_act_for(contract.client_id) {
            return Err(ClaimError::NoActiveContract(contract_id.to_string()));
        }

        let claim = Claim::submit(
            contract_id,
            contract.client_id,
            submission,
            &contract.plan.reimbursable_tiers(),
        )?;
        self.claims.insert(claim.clone()).await?;
        info!(claim_id = %claim.id, amount = %claim.amount, "claim submitted");
        Ok(claim)
    }

    /// Resolves a pending claim
    ///
    /// The decision is applied to the status read here and committed with
    /// that expectation, so when two reviewers race the second commit
    /// fails with `AlreadyResolved` instead of silently overwriting.
    #[instrument(skip(self))]
    pub async fn review_claim(
        &self,
        actor: &Actor,
        claim_id: ClaimId,
        decision: ReviewDecision,
    ) -> Result<Claim, ClaimError> {
        let mut claim = self.claims.get(claim_id).await?;
        let observed = claim.status;
        claim.review(decision, actor.role)?;
        self.claims.update(claim.clone(), observed).await?;
        info!(claim_id = %claim_id, ?decision, "claim resolved");
        Ok(claim)
    }

    /// All claims of one client, newest first
    pub async fn list_claims_for_client(
        &self,
        actor: &Actor,
        client_id: ClientId,
    ) -> Result<Vec<Claim>, ClaimError> {
        if !actor.may_act_for(client_id) {
            return Err(ClaimError::Forbidden(actor.role));
        }
        Ok(self.claims.list_for_client(client_id).await?)
    }

    /// The review queue: pending claims, oldest first, staff only
    pub async fn list_claims_for_review(&self, actor: &Actor) -> Result<Vec<Claim>, ClaimError> {
        if !actor.role.can_review() {
            return Err(ClaimError::Forbidden(actor.role));
        }
        Ok(self.claims.list_pending().await?)
    }
}
