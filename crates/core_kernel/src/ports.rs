//! Persistence port errors
//!
//! Each domain defines a store port trait describing what it needs from the
//! persistence boundary. Adapters (in-memory today, a database tomorrow)
//! implement those traits and report failures through this shared error
//! type, so the domains stay ignorant of the storage technology.

use thiserror::Error;

/// Error type for store port operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    /// The requested entity was not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entity with the same natural key already exists
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// The entity changed since it was read; the caller saw stale state
    #[error("{entity} {id} was modified concurrently")]
    StaleState { entity: &'static str, id: String },

    /// The store is unreachable or failed mid-operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl PortError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        PortError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn duplicate(entity: &'static str, key: impl ToString) -> Self {
        PortError::Duplicate {
            entity,
            key: key.to_string(),
        }
    }

    pub fn stale(entity: &'static str, id: impl ToString) -> Self {
        PortError::StaleState {
            entity,
            id: id.to_string(),
        }
    }
}
