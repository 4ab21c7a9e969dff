//! Request/response data transfer objects

pub mod claims;
pub mod clients;
pub mod contracts;
pub mod payments;
