//! Application Services
//!
//! This crate sits between the HTTP surface and the domain crates. Each
//! service owns the store ports it needs, enforces who may perform the
//! operation, and delegates the business rules to the aggregates.
//!
//! # Authorization model
//!
//! Every operation receives the authenticated [`core_kernel::Actor`].
//! Clients act only on their own records (`Actor::may_act_for`); admins
//! and agents review claims, approve payments, and read across clients
//! (`Role::can_review`). The services enforce this gate so the domain
//! crates stay free of transport concerns.

pub mod claims;
pub mod clients;
pub mod contracts;
pub mod payments;

pub use claims::ClaimService;
pub use clients::ClientService;
pub use contracts::ContractService;
pub use payments::PaymentService;
