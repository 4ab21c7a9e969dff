//! Client store port
//!
//! The port describes what the client domain needs from the persistence
//! boundary; adapters live in `infra_store`.

use async_trait::async_trait;

use core_kernel::{ClientId, PortError};

use crate::client::Client;

/// Persistence operations for clients
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Inserts a new client
    ///
    /// Fails with `PortError::Duplicate` when another client already holds
    /// the same national id.
    async fn insert(&self, client: Client) -> Result<(), PortError>;

    /// Fetches a client by id
    async fn get(&self, id: ClientId) -> Result<Client, PortError>;

    /// Looks up a client by national id
    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Client>, PortError>;
}
