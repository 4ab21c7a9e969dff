//! Payment handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{Actor, Currency, Money, PaymentId};
use domain_billing::error::PaymentError;
use domain_billing::payment::PaymentFilter;

use crate::dto::payments::{PaymentListQuery, PaymentResponse, RecordPaymentRequest};
use crate::error::ApiError;
use crate::handlers::clients::parse_client_id;
use crate::handlers::contracts::parse_contract_id;
use crate::AppState;

/// Records a premium payment
pub async fn record_payment(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), ApiError> {
    let contract_id = parse_contract_id(&request.contract_id)?;
    let proof = request
        .proof
        .map(|dto| dto.into_reference())
        .transpose()
        .map_err(PaymentError::InvalidProof)?;

    let payment = state
        .payments
        .record_payment(
            &actor,
            contract_id,
            Money::new(request.amount, Currency::USD),
            request.paid_at,
            proof,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(payment.into())))
}

/// Approves a pending payment
pub async fn approve_payment(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let id: PaymentId = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid payment id: {id}")))?;

    let payment = state.payments.approve_payment(&actor, id).await?;
    Ok(Json(payment.into()))
}

/// Lists payments visible to the caller
pub async fn list_payments(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<Vec<PaymentResponse>>, ApiError> {
    let filter = PaymentFilter {
        contract_id: query
            .contract_id
            .as_deref()
            .map(parse_contract_id)
            .transpose()?,
        client_id: query.client_id.as_deref().map(parse_client_id).transpose()?,
        status: query.status,
    };

    let payments = state.payments.list_payments(&actor, filter).await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}
