//! Contract handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{Actor, ContractId};
use domain_contract::contract::ContractFilter;

use crate::dto::contracts::{
    ContractListQuery, ContractResponse, CreateContractRequest, UpdateContractStatusRequest,
};
use crate::error::ApiError;
use crate::handlers::clients::parse_client_id;
use crate::AppState;

/// Takes out a new contract
pub async fn create_contract(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateContractRequest>,
) -> Result<(StatusCode, Json<ContractResponse>), ApiError> {
    let client_id = parse_client_id(&request.client_id)?;
    let beneficiaries = request.beneficiaries.into_iter().map(Into::into).collect();

    let contract = state
        .contracts
        .create_contract(&actor, client_id, request.plan, beneficiaries)
        .await?;
    Ok((StatusCode::CREATED, Json(contract.into())))
}

/// Lists contracts visible to the caller
pub async fn list_contracts(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ContractListQuery>,
) -> Result<Json<Vec<ContractResponse>>, ApiError> {
    let filter = ContractFilter {
        client_id: query.client_id.as_deref().map(parse_client_id).transpose()?,
        status: query.status,
    };

    let contracts = state.contracts.list_contracts(&actor, filter).await?;
    Ok(Json(contracts.into_iter().map(Into::into).collect()))
}

/// Moves a contract to a new lifecycle status
pub async fn update_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContractStatusRequest>,
) -> Result<Json<ContractResponse>, ApiError> {
    let id = parse_contract_id(&id)?;
    let contract = state
        .contracts
        .update_contract_status(&actor, id, request.status)
        .await?;
    Ok(Json(contract.into()))
}

pub(crate) fn parse_contract_id(raw: &str) -> Result<ContractId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid contract id: {raw}")))
}
