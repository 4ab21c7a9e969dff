//! Billing Domain
//!
//! Premium payments are uploaded by clients with a proof-of-payment
//! document and sit Pending until an admin or agent approves them.
//! Approval is terminal. The contract's first approved payment is what
//! moves the contract from Pending to Active; that orchestration lives in
//! `app_engine`, this crate owns the payment record itself.

pub mod error;
pub mod payment;
pub mod ports;

pub use error::PaymentError;
pub use payment::{Payment, PaymentFilter, PaymentStatus};
pub use ports::PaymentStore;
