//! Gate Router

use crate::application::config::GateConfig;
use crate::domain::repository::{AccessCodeRepository, ScoreLedgerRepository};
use crate::infra::memory::InMemoryGateRepository;
use crate::presentation::handlers::{self, GateAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the gate router with the in-memory repository
pub fn gate_router(repo: InMemoryGateRepository, config: GateConfig) -> Router {
    gate_router_generic(repo, config)
}

/// Create a generic gate router for any repository implementation
pub fn gate_router_generic<R>(repo: R, config: GateConfig) -> Router
where
    R: AccessCodeRepository + ScoreLedgerRepository + Clone + Send + Sync + 'static,
{
    let state = GateAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/validate-code", post(handlers::validate_code::<R>))
        .route("/submit-score", post(handlers::submit_score::<R>))
        .with_state(state)
}
