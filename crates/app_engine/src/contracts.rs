//! Contract management service

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{Actor, ClientId, ContractId, PortError};
use domain_client::ports::ClientStore;
use domain_contract::beneficiary::Beneficiary;
use domain_contract::contract::{Contract, ContractFilter, ContractStatus};
use domain_contract::error::ContractError;
use domain_contract::plan::PlanType;
use domain_contract::ports::ContractStore;

/// Creates contracts and drives their lifecycle
pub struct ContractService {
    contracts: Arc<dyn ContractStore>,
    clients: Arc<dyn ClientStore>,
}

impl ContractService {
    pub fn new(contracts: Arc<dyn ContractStore>, clients: Arc<dyn ClientStore>) -> Self {
        Self { contracts, clients }
    }

    /// Takes out a new contract for a registered client
    ///
    /// Clients contract for themselves; admins and agents may contract on
    /// behalf of any client. Life beneficiary sets are validated by the
    /// allocator before anything is persisted.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when a client acts for someone else
    /// - `InvalidClient` when the client id is not registered
    /// - `InvalidBeneficiaries` / `BeneficiariesNotAllowed` from the
    ///   beneficiary rules
    #[instrument(skip(self, beneficiaries), fields(beneficiaries = beneficiaries.len()))]
    pub async fn create_contract(
        &self,
        actor: &Actor,
        client_id: ClientId,
        plan: PlanType,
        beneficiaries: Vec<Beneficiary>,
    ) -> Result<Contract, ContractError> {
        if !actor.may_act_for(client_id) {
            return Err(ContractError::Forbidden(actor.role));
        }

        self.clients.get(client_id).await.map_err(|err| match err {
            PortError::NotFound { id, .. } => ContractError::InvalidClient(id),
            other => ContractError::Store(other.to_string()),
        })?;

        let contract = Contract::new(client_id, plan, beneficiaries)?;
        self.contracts.insert(contract.clone()).await?;
        info!(contract_id = %contract.id, plan = %plan, "contract created");
        Ok(contract)
    }

    /// Lists contracts, scoped to the caller
    ///
    /// Clients see only their own contracts regardless of the filter they
    /// pass; admins and agents see everything the filter admits.
    pub async fn list_contracts(
        &self,
        actor: &Actor,
        mut filter: ContractFilter,
    ) -> Result<Vec<Contract>, ContractError> {
        if !actor.role.can_read_all() {
            match actor.client_id {
                Some(own_id) => filter.client_id = Some(own_id),
                None => return Err(ContractError::Forbidden(actor.role)),
            }
        }
        Ok(self.contracts.list(filter).await?)
    }

    /// Moves a contract to a new lifecycle status, staff only
    #[instrument(skip(self))]
    pub async fn update_contract_status(
        &self,
        actor: &Actor,
        id: ContractId,
        status: ContractStatus,
    ) -> Result<Contract, ContractError> {
        if !actor.role.can_review() {
            return Err(ContractError::Forbidden(actor.role));
        }

        let mut contract = self.contracts.get(id).await?;
        let observed = contract.status;
        contract.transition_to(status)?;
        self.contracts.update(contract.clone(), observed).await?;
        info!(contract_id = %id, ?status, "contract status updated");
        Ok(contract)
    }
}
