//! Contract domain errors

use thiserror::Error;

use core_kernel::{PortError, Role};

use crate::beneficiary::AllocationError;
use crate::contract::ContractStatus;
use crate::plan::PlanType;

/// Errors that can occur in the contract domain
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Invalid beneficiary set: {0}")]
    InvalidBeneficiaries(#[from] AllocationError),

    #[error("{plan} contracts do not carry beneficiaries")]
    BeneficiariesNotAllowed { plan: PlanType },

    #[error("Invalid client identity: {0}")]
    InvalidClient(String),

    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: ContractStatus,
        to: ContractStatus,
    },

    #[error("Role {0} is not permitted to perform this operation")]
    Forbidden(Role),

    #[error("Contract not found: {0}")]
    NotFound(String),

    #[error("Contract was modified concurrently: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<PortError> for ContractError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => ContractError::NotFound(id),
            PortError::StaleState { id, .. } => ContractError::Conflict(id),
            other => ContractError::Store(other.to_string()),
        }
    }
}
