//! Store adapters, one module per domain port

pub mod claims;
pub mod clients;
pub mod contracts;
pub mod payments;
