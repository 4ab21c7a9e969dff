//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{Actor, ClaimId};
use domain_claims::error::ClaimError;

use crate::dto::claims::{ClaimResponse, ReviewClaimRequest, SubmitClaimRequest};
use crate::error::ApiError;
use crate::handlers::clients::parse_client_id;
use crate::handlers::contracts::parse_contract_id;
use crate::AppState;

/// Submits a reimbursement claim
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let contract_id = parse_contract_id(&request.contract_id)?;
    let submission = request
        .into_submission()
        .map_err(ClaimError::UnsupportedAttachment)?;

    let claim = state
        .claims
        .submit_claim(&actor, contract_id, submission)
        .await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Resolves a pending claim
pub async fn review_claim(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(request): Json<ReviewClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id: ClaimId = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid claim id: {id}")))?;

    let claim = state
        .claims
        .review_claim(&actor, id, request.decision)
        .await?;
    Ok(Json(claim.into()))
}

/// The review queue: pending claims, oldest first
pub async fn list_claims_for_review(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list_claims_for_review(&actor).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// One client's claim history, newest first
pub async fn list_claims_for_client(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let client_id = parse_client_id(&id)?;
    let claims = state
        .claims
        .list_claims_for_client(&actor, client_id)
        .await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}
