//! Contract store adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ContractId, PortError};
use domain_contract::contract::{Contract, ContractFilter, ContractStatus};
use domain_contract::ports::ContractStore;

/// In-memory contract store
///
/// Status updates are guarded by the status the caller observed, so the
/// Pending -> Active transition driven by payment approval applies at most
/// once even under racing approvals.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContractStore {
    contracts: Arc<RwLock<HashMap<ContractId, Contract>>>,
}

impl InMemoryContractStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContractStore for InMemoryContractStore {
    async fn insert(&self, contract: Contract) -> Result<(), PortError> {
        let mut contracts = self.contracts.write().await;
        if contracts.contains_key(&contract.id) {
            return Err(PortError::duplicate("contract", contract.id));
        }
        debug!(contract_id = %contract.id, "inserting contract");
        contracts.insert(contract.id, contract);
        Ok(())
    }

    async fn get(&self, id: ContractId) -> Result<Contract, PortError> {
        self.contracts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("contract", id))
    }

    async fn update(
        &self,
        contract: Contract,
        expected_status: ContractStatus,
    ) -> Result<(), PortError> {
        let mut contracts = self.contracts.write().await;
        let stored = contracts
            .get(&contract.id)
            .ok_or_else(|| PortError::not_found("contract", contract.id))?;
        if stored.status != expected_status {
            return Err(PortError::stale("contract", contract.id));
        }
        contracts.insert(contract.id, contract);
        Ok(())
    }

    async fn list(&self, filter: ContractFilter) -> Result<Vec<Contract>, PortError> {
        let contracts = self.contracts.read().await;
        let mut matching: Vec<Contract> = contracts
            .values()
            .filter(|contract| filter.matches(contract))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.contracted_at.cmp(&a.contracted_at));
        Ok(matching)
    }
}
