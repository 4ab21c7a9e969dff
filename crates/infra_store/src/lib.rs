//! Persistence Boundary
//!
//! This crate provides the storage adapters behind the domain store ports.
//! The current adapters keep state in process memory behind `tokio` RwLocks,
//! which is enough for the engine's single-node deployment and for tests.
//!
//! # Architecture
//!
//! Each domain crate owns a store port trait; this crate implements those
//! traits without leaking storage details back into the domains. Status
//! mutations are compare-and-swap: callers pass the status they read, and a
//! write against a different stored status fails with
//! `PortError::StaleState`. That single rule resolves every concurrent
//! review and approval race in favour of the first committed writer.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::InMemoryClaimStore;
//!
//! let store = InMemoryClaimStore::new();
//! store.insert(claim).await?;
//! ```

pub mod repositories;

pub use repositories::claims::InMemoryClaimStore;
pub use repositories::clients::InMemoryClientStore;
pub use repositories::contracts::InMemoryContractStore;
pub use repositories::payments::InMemoryPaymentStore;
