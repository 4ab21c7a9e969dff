//! Client registration service

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{Actor, ClientId};
use domain_client::client::{Client, ClientProfile};
use domain_client::error::ClientError;
use domain_client::ports::ClientStore;
use domain_client::validation::ClientValidator;

/// Registers clients and answers identity lookups
pub struct ClientService {
    clients: Arc<dyn ClientStore>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    /// Registers a new client
    ///
    /// The profile is validated as a whole so the caller sees every field
    /// error at once, then the national id is checked for uniqueness.
    ///
    /// # Errors
    ///
    /// - `InvalidProfile` listing all failed field checks
    /// - `DuplicateNationalId` when the person is already registered
    #[instrument(skip(self, profile), fields(national_id = %profile.national_id))]
    pub async fn register_client(&self, profile: ClientProfile) -> Result<Client, ClientError> {
        let validation = ClientValidator::validate(&profile);
        if !validation.is_valid {
            return Err(ClientError::InvalidProfile(validation.errors.join("; ")));
        }

        if let Some(existing) = self.clients.find_by_national_id(&profile.national_id).await? {
            return Err(ClientError::DuplicateNationalId(
                existing.profile.national_id,
            ));
        }

        let client = Client::new(profile);
        self.clients.insert(client.clone()).await?;
        info!(client_id = %client.id, "client registered");
        Ok(client)
    }

    /// Fetches a client, scoped to the caller
    ///
    /// Clients may read only their own record; admins and agents read any.
    pub async fn get_client(&self, actor: &Actor, id: ClientId) -> Result<Client, ClientError> {
        if !actor.may_act_for(id) {
            return Err(ClientError::Forbidden(actor.role));
        }
        Ok(self.clients.get(id).await?)
    }

    /// Looks up a client by national id, for staff workflows
    pub async fn find_by_national_id(
        &self,
        actor: &Actor,
        national_id: &str,
    ) -> Result<Option<Client>, ClientError> {
        if !actor.role.can_read_all() {
            return Err(ClientError::Forbidden(actor.role));
        }
        Ok(self.clients.find_by_national_id(national_id).await?)
    }
}
