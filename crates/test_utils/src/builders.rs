//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{FileReference, Money};
use domain_claims::claim::{ClaimSubmission, ExpenseType};
use domain_contract::beneficiary::{Beneficiary, Relationship};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for beneficiary entries
pub struct TestBeneficiaryBuilder {
    name: String,
    national_id: String,
    date_of_birth: NaiveDate,
    relationship: Relationship,
    percentage: u8,
    phone: String,
}

impl TestBeneficiaryBuilder {
    /// Creates a builder for a beneficiary holding the full payout
    pub fn new(national_id: impl Into<String>) -> Self {
        Self {
            name: "Camila Restrepo".to_string(),
            national_id: national_id.into(),
            date_of_birth: NaiveDate::from_ymd_opt(2010, 7, 2).unwrap(),
            relationship: Relationship::Child,
            percentage: 100,
            phone: "3201112233".to_string(),
        }
    }

    /// Sets the payout percentage
    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the relationship to the contract holder
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = relationship;
        self
    }

    /// Builds the beneficiary
    pub fn build(self) -> Beneficiary {
        Beneficiary {
            name: self.name,
            national_id: self.national_id,
            date_of_birth: self.date_of_birth,
            relationship: self.relationship,
            percentage: self.percentage,
            phone: self.phone,
        }
    }
}

/// Builder for claim submissions
pub struct TestSubmissionBuilder {
    expense_date: NaiveDate,
    expense_type: ExpenseType,
    amount: Money,
    description: Option<String>,
    attachments: Vec<FileReference>,
}

impl Default for TestSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSubmissionBuilder {
    /// Creates a builder for a valid Health-tier consultation claim
    pub fn new() -> Self {
        Self {
            expense_date: DateFixtures::today(),
            expense_type: ExpenseType::Consultation,
            amount: MoneyFixtures::health_premium(),
            description: Some("General consultation".to_string()),
            attachments: vec![],
        }
    }

    /// Sets the expense date
    pub fn with_expense_date(mut self, date: NaiveDate) -> Self {
        self.expense_date = date;
        self
    }

    /// Sets the expense type
    pub fn with_expense_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_type = expense_type;
        self
    }

    /// Sets the claimed amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Adds an attachment
    pub fn with_attachment(mut self, attachment: FileReference) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Builds the submission
    pub fn build(self) -> ClaimSubmission {
        ClaimSubmission {
            expense_date: self.expense_date,
            expense_type: self.expense_type,
            amount: self.amount,
            description: self.description,
            attachments: self.attachments,
        }
    }
}
