//! Client store adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ClientId, PortError};
use domain_client::client::Client;
use domain_client::ports::ClientStore;

/// In-memory client store
///
/// National id uniqueness is enforced at insert time under the write lock,
/// so two concurrent registrations of the same person admit exactly one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn insert(&self, client: Client) -> Result<(), PortError> {
        let mut clients = self.clients.write().await;
        if clients
            .values()
            .any(|existing| existing.profile.national_id == client.profile.national_id)
        {
            return Err(PortError::duplicate(
                "client",
                &client.profile.national_id,
            ));
        }
        debug!(client_id = %client.id, "inserting client");
        clients.insert(client.id, client);
        Ok(())
    }

    async fn get(&self, id: ClientId) -> Result<Client, PortError> {
        self.clients
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("client", id))
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Client>, PortError> {
        Ok(self
            .clients
            .read()
            .await
            .values()
            .find(|client| client.profile.national_id == national_id)
            .cloned())
    }
}
