//! API error handling
//!
//! Domain errors map onto four buckets: validation failures are 422,
//! authorization failures 403, state conflicts 409, and unknown entities
//! 404. Everything else is a 500 with the detail kept out of the body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_billing::error::PaymentError;
use domain_claims::error::ClaimError;
use domain_client::error::ClientError;
use domain_contract::error::ContractError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!(detail = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidProfile(_) => ApiError::Validation(err.to_string()),
            ClientError::DuplicateNationalId(_) => ApiError::Conflict(err.to_string()),
            ClientError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            ClientError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClientError::Store(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::InvalidBeneficiaries(_)
            | ContractError::BeneficiariesNotAllowed { .. }
            | ContractError::InvalidClient(_) => ApiError::Validation(err.to_string()),
            ContractError::InvalidStatusTransition { .. } | ContractError::Conflict(_) => {
                ApiError::Conflict(err.to_string())
            }
            ContractError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            ContractError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ContractError::Store(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::FutureExpenseDate { .. }
            | ClaimError::AmountNotAllowed { .. }
            | ClaimError::NoActiveContract(_)
            | ClaimError::UnsupportedAttachment(_) => ApiError::Validation(err.to_string()),
            ClaimError::AlreadyResolved => ApiError::Conflict(err.to_string()),
            ClaimError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            ClaimError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClaimError::Store(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::AmountMismatch { .. }
            | PaymentError::FuturePaymentDate { .. }
            | PaymentError::MissingProof
            | PaymentError::InvalidProof(_) => ApiError::Validation(err.to_string()),
            PaymentError::AlreadyApproved => ApiError::Conflict(err.to_string()),
            PaymentError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            PaymentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PaymentError::Store(detail) => ApiError::Internal(detail),
        }
    }
}
