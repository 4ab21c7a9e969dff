//! Payment DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_billing::payment::{Payment, PaymentStatus};

use crate::dto::claims::AttachmentDto;

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub contract_id: String,
    pub amount: Decimal,
    pub paid_at: NaiveDate,
    pub proof: Option<AttachmentDto>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PaymentListQuery {
    pub contract_id: Option<String>,
    pub client_id: Option<String>,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub contract_id: String,
    pub client_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub paid_at: NaiveDate,
    pub status: PaymentStatus,
    pub proof_file_name: String,
    pub recorded_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.to_string(),
            contract_id: payment.contract_id.to_string(),
            client_id: payment.client_id.to_string(),
            amount: payment.amount.amount(),
            currency: payment.amount.currency().code().to_string(),
            paid_at: payment.paid_at,
            status: payment.status,
            proof_file_name: payment.proof.file_name,
            recorded_at: payment.recorded_at,
            approved_at: payment.approved_at,
        }
    }
}
