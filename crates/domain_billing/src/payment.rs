//! Premium payment record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, ContractId, FileReference, Money, PaymentId, Role};

use crate::error::PaymentError;

/// Payment status
///
/// Pending until an admin or agent approves; Approved is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
}

/// A premium payment uploaded against a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Contract the premium pays for
    pub contract_id: ContractId,
    /// Paying client (the contract owner)
    pub client_id: ClientId,
    /// Date the payment was made; never in the future
    pub paid_at: NaiveDate,
    /// Paid amount; must equal the contract's monthly premium
    pub amount: Money,
    /// Proof-of-payment document
    pub proof: FileReference,
    /// Lifecycle status
    pub status: PaymentStatus,
    /// When the record was uploaded
    pub recorded_at: DateTime<Utc>,
    /// When the payment was approved
    pub approved_at: Option<DateTime<Utc>>,
    /// Role that approved the payment
    pub approved_by: Option<Role>,
}

impl Payment {
    /// Validates and creates a Pending payment record
    ///
    /// # Errors
    ///
    /// - `MissingProof` when no proof document accompanies the upload
    /// - `InvalidProof` when the proof fails attachment metadata checks
    /// - `FuturePaymentDate` when `paid_at` is after today
    /// - `AmountMismatch` when the amount differs from the contract's
    ///   required premium tier
    pub fn record(
        contract_id: ContractId,
        client_id: ClientId,
        amount: Money,
        paid_at: NaiveDate,
        proof: Option<FileReference>,
        required_premium: Money,
    ) -> Result<Self, PaymentError> {
        let proof = proof.ok_or(PaymentError::MissingProof)?;
        proof.validate()?;

        let today = Utc::now().date_naive();
        if paid_at > today {
            return Err(PaymentError::FuturePaymentDate { paid_at });
        }

        if amount != required_premium {
            return Err(PaymentError::AmountMismatch {
                amount,
                required: required_premium,
            });
        }

        Ok(Self {
            id: PaymentId::new_v7(),
            contract_id,
            client_id,
            paid_at,
            amount,
            proof,
            status: PaymentStatus::Pending,
            recorded_at: Utc::now(),
            approved_at: None,
            approved_by: None,
        })
    }

    /// True once the payment has been approved
    pub fn is_approved(&self) -> bool {
        self.status == PaymentStatus::Approved
    }

    /// Approves a pending payment
    ///
    /// # Errors
    ///
    /// - `Forbidden` unless the reviewer is admin or agent
    /// - `AlreadyApproved` when the payment is already terminal
    pub fn approve(&mut self, reviewer: Role) -> Result<(), PaymentError> {
        if !reviewer.can_review() {
            return Err(PaymentError::Forbidden(reviewer));
        }
        if self.is_approved() {
            return Err(PaymentError::AlreadyApproved);
        }

        self.status = PaymentStatus::Approved;
        self.approved_at = Some(Utc::now());
        self.approved_by = Some(reviewer);
        Ok(())
    }
}

/// Filter for payment listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    /// Restrict to one contract's payments
    pub contract_id: Option<ContractId>,
    /// Restrict to one client's payments
    pub client_id: Option<ClientId>,
    /// Restrict to one status
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    /// All payments recorded against one contract
    pub fn for_contract(contract_id: ContractId) -> Self {
        Self {
            contract_id: Some(contract_id),
            ..Default::default()
        }
    }

    /// All payments uploaded by one client
    pub fn for_client(client_id: ClientId) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }

    /// True if the payment passes the filter
    pub fn matches(&self, payment: &Payment) -> bool {
        self.contract_id.map_or(true, |id| payment.contract_id == id)
            && self.client_id.map_or(true, |id| payment.client_id == id)
            && self.status.map_or(true, |s| payment.status == s)
    }
}
