//! Claim DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, FileError, FileReference, Money};
use domain_claims::claim::{Claim, ClaimStatus, ClaimSubmission, ExpenseType, ReviewDecision};

/// Attachment metadata as uploaded by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentDto {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl AttachmentDto {
    /// Validates the metadata and mints a stored reference
    pub fn into_reference(self) -> Result<FileReference, FileError> {
        FileReference::new(self.file_name, &self.content_type, self.size_bytes)
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    pub contract_id: String,
    pub expense_date: NaiveDate,
    pub expense_type: ExpenseType,
    pub amount: Decimal,
    pub description: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
}

impl SubmitClaimRequest {
    /// Builds the domain submission, validating attachment metadata
    pub fn into_submission(self) -> Result<ClaimSubmission, FileError> {
        let attachments = self
            .attachments
            .into_iter()
            .map(AttachmentDto::into_reference)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClaimSubmission {
            expense_date: self.expense_date,
            expense_type: self.expense_type,
            amount: Money::new(self.amount, Currency::USD),
            description: self.description,
            attachments,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewClaimRequest {
    pub decision: ReviewDecision,
}

#[derive(Debug, Serialize)]
pub struct AttachmentResponse {
    pub id: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub contract_id: String,
    pub client_id: String,
    pub expense_date: NaiveDate,
    pub expense_type: ExpenseType,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub status: ClaimStatus,
    pub attachments: Vec<AttachmentResponse>,
    pub submitted_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            contract_id: claim.contract_id.to_string(),
            client_id: claim.client_id.to_string(),
            expense_date: claim.expense_date,
            expense_type: claim.expense_type,
            amount: claim.amount.amount(),
            currency: claim.amount.currency().code().to_string(),
            description: claim.description,
            status: claim.status,
            attachments: claim
                .attachments
                .into_iter()
                .map(|a| AttachmentResponse {
                    id: a.id.to_string(),
                    file_name: a.file_name,
                    content_type: a.media_type.mime().to_string(),
                    size_bytes: a.size_bytes,
                })
                .collect(),
            submitted_at: claim.submitted_at,
            resolved_at: claim.resolved_at,
        }
    }
}
