//! Contract store port

use async_trait::async_trait;

use core_kernel::{ContractId, PortError};

use crate::contract::{Contract, ContractFilter, ContractStatus};

/// Persistence operations for contracts
///
/// `update` carries the status the caller read before mutating; the
/// adapter must reject the write with `PortError::StaleState` when the
/// stored status differs, so concurrent status changes never
/// double-apply.
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Inserts a new contract together with its beneficiary set
    async fn insert(&self, contract: Contract) -> Result<(), PortError>;

    /// Fetches a contract by id
    async fn get(&self, id: ContractId) -> Result<Contract, PortError>;

    /// Replaces a contract, guarded by the status the caller observed
    async fn update(&self, contract: Contract, expected_status: ContractStatus) -> Result<(), PortError>;

    /// Lists contracts matching the filter, newest contracted first
    async fn list(&self, filter: ContractFilter) -> Result<Vec<Contract>, PortError>;
}
