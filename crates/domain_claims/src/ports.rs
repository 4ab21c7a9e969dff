//! Claim store port

use async_trait::async_trait;

use core_kernel::{ClaimId, ClientId, PortError};

use crate::claim::{Claim, ClaimStatus};

/// Persistence operations for claims
///
/// Inserts are atomic: the claim and its attachment references commit
/// together or not at all, so no stored claim ever lacks its documents.
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Inserts a new claim with its attachments
    async fn insert(&self, claim: Claim) -> Result<(), PortError>;

    /// Fetches a claim by id
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Replaces a claim, guarded by the status the caller observed
    ///
    /// Returns `PortError::StaleState` when the stored status differs,
    /// which resolves concurrent review races in favour of the first
    /// committed reviewer.
    async fn update(&self, claim: Claim, expected_status: ClaimStatus) -> Result<(), PortError>;

    /// All claims submitted by one client, newest first
    async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Claim>, PortError>;

    /// All pending claims awaiting review, oldest first
    async fn list_pending(&self) -> Result<Vec<Claim>, PortError>;
}
