//! Request handlers

pub mod claims;
pub mod clients;
pub mod contracts;
pub mod health;
pub mod payments;
