//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ClientId, ContractId, FileReference, Money, Role};

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Awaiting review
    Pending,
    /// Approved for reimbursement (terminal)
    Approved,
    /// Rejected (terminal)
    Rejected,
}

impl ClaimStatus {
    /// True once the claim has been resolved either way
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

/// Category of the reimbursed medical expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    Consultation,
    Medication,
    LabTest,
    Radiography,
    Hospitalization,
    Surgery,
    Physiotherapy,
    Other,
}

/// Reviewer decision on a pending claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// The fields a client supplies when requesting reimbursement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    /// Date the expense was incurred; never in the future
    pub expense_date: NaiveDate,
    /// Expense category
    pub expense_type: ExpenseType,
    /// Requested amount; must match one of the plan's tiers
    pub amount: Money,
    /// Free-form explanation
    pub description: Option<String>,
    /// Supporting documents, already metadata-validated on construction
    pub attachments: Vec<FileReference>,
}

/// A reimbursement request against an active contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Contract the expense is claimed against
    pub contract_id: ContractId,
    /// Claiming client (the contract owner)
    pub client_id: ClientId,
    /// Date the expense was incurred
    pub expense_date: NaiveDate,
    /// Expense category
    pub expense_type: ExpenseType,
    /// Requested amount
    pub amount: Money,
    /// Free-form explanation
    pub description: Option<String>,
    /// Supporting documents, stored keyed by this claim's id
    pub attachments: Vec<FileReference>,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// When the claim was approved or rejected
    pub resolved_at: Option<DateTime<Utc>>,
    /// Role that resolved the claim
    pub resolved_by: Option<Role>,
}

impl Claim {
    /// Validates a submission and creates a Pending claim
    ///
    /// The caller resolves the contract first and passes the plan's
    /// reimbursable tiers; ownership and contract status checks happen
    /// upstream where the contract is loaded.
    ///
    /// # Errors
    ///
    /// - `FutureExpenseDate` when the expense date is after today
    /// - `AmountNotAllowed` when the amount is outside the tier set
    /// - `UnsupportedAttachment` when any attachment fails metadata checks
    pub fn submit(
        contract_id: ContractId,
        client_id: ClientId,
        submission: ClaimSubmission,
        allowed_amounts: &[Money],
    ) -> Result<Self, ClaimError> {
        let today = Utc::now().date_naive();
        if submission.expense_date > today {
            return Err(ClaimError::FutureExpenseDate {
                expense_date: submission.expense_date,
            });
        }

        if !allowed_amounts.contains(&submission.amount) {
            return Err(ClaimError::AmountNotAllowed {
                amount: submission.amount,
            });
        }

        for attachment in &submission.attachments {
            attachment.validate()?;
        }

        Ok(Self {
            id: ClaimId::new_v7(),
            contract_id,
            client_id,
            expense_date: submission.expense_date,
            expense_type: submission.expense_type,
            amount: submission.amount,
            description: submission.description,
            attachments: submission.attachments,
            status: ClaimStatus::Pending,
            submitted_at: Utc::now(),
            resolved_at: None,
            resolved_by: None,
        })
    }

    /// Resolves a pending claim
    ///
    /// # Errors
    ///
    /// - `Forbidden` unless the reviewer is admin or agent
    /// - `AlreadyResolved` when the claim left Pending earlier; the
    ///   rejection is explicit, never silently ignored
    pub fn review(&mut self, decision: ReviewDecision, reviewer: Role) -> Result<(), ClaimError> {
        if !reviewer.can_review() {
            return Err(ClaimError::Forbidden(reviewer));
        }
        if self.status.is_terminal() {
            return Err(ClaimError::AlreadyResolved);
        }

        self.status = match decision {
            ReviewDecision::Approve => ClaimStatus::Approved,
            ReviewDecision::Reject => ClaimStatus::Rejected,
        };
        self.resolved_at = Some(Utc::now());
        self.resolved_by = Some(reviewer);
        Ok(())
    }
}
