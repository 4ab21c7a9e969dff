//! Client handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{Actor, ClientId};

use crate::dto::clients::{ClientResponse, RegisterClientRequest};
use crate::error::ApiError;
use crate::AppState;

/// Registers a new client
pub async fn register_client(
    State(state): State<AppState>,
    Json(request): Json<RegisterClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    let client = state.clients.register_client(request.into()).await?;
    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Gets a client by id
pub async fn get_client(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id = parse_client_id(&id)?;
    let client = state.clients.get_client(&actor, id).await?;
    Ok(Json(client.into()))
}

pub(crate) fn parse_client_id(raw: &str) -> Result<ClientId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid client id: {raw}")))
}
