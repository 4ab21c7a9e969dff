//! HTTP API Layer
//!
//! This crate provides the REST API for the brokerage back office using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **Middleware**: Authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use app_engine::{ClaimService, ClientService, ContractService, PaymentService};
use infra_store::{
    InMemoryClaimStore, InMemoryClientStore, InMemoryContractStore, InMemoryPaymentStore,
};

use crate::config::ApiConfig;
use crate::handlers::{claims, clients, contracts, health, payments};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientService>,
    pub contracts: Arc<ContractService>,
    pub claims: Arc<ClaimService>,
    pub payments: Arc<PaymentService>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the services over fresh in-memory stores
    pub fn new(config: ApiConfig) -> Self {
        let client_store = Arc::new(InMemoryClientStore::new());
        let contract_store = Arc::new(InMemoryContractStore::new());
        let claim_store = Arc::new(InMemoryClaimStore::new());
        let payment_store = Arc::new(InMemoryPaymentStore::new());

        Self {
            clients: Arc::new(ClientService::new(client_store.clone())),
            contracts: Arc::new(ContractService::new(
                contract_store.clone(),
                client_store,
            )),
            claims: Arc::new(ClaimService::new(claim_store, contract_store.clone())),
            payments: Arc::new(PaymentService::new(payment_store, contract_store)),
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Client routes
    let client_routes = Router::new()
        .route("/", post(clients::register_client))
        .route("/:id", get(clients::get_client))
        .route("/:id/claims", get(claims::list_claims_for_client));

    // Contract routes
    let contract_routes = Router::new()
        .route("/", post(contracts::create_contract))
        .route("/", get(contracts::list_contracts))
        .route("/:id/status", put(contracts::update_status));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/review", get(claims::list_claims_for_review))
        .route("/:id/review", post(claims::review_claim));

    // Payment routes
    let payment_routes = Router::new()
        .route("/", post(payments::record_payment))
        .route("/", get(payments::list_payments))
        .route("/:id/approve", post(payments::approve_payment));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/contracts", contract_routes)
        .nest("/claims", claim_routes)
        .nest("/payments", payment_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
