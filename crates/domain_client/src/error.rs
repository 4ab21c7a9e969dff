//! Client domain errors

use thiserror::Error;

use core_kernel::{PortError, Role};

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid client profile: {0}")]
    InvalidProfile(String),

    #[error("Role {0} is not permitted to read this client")]
    Forbidden(Role),

    #[error("Client not found: {0}")]
    NotFound(String),

    #[error("A client with national id {0} is already registered")]
    DuplicateNationalId(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<PortError> for ClientError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => ClientError::NotFound(id),
            PortError::Duplicate { key, .. } => ClientError::DuplicateNationalId(key),
            other => ClientError::Store(other.to_string()),
        }
    }
}
