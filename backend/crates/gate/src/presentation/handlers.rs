//! HTTP Handlers

use crate::application::config::GateConfig;
use crate::application::submit_score::{SubmitScoreInput, SubmitScoreUseCase};
use crate::application::validate_code::ValidateCodeUseCase;
use crate::domain::repository::{AccessCodeRepository, ScoreLedgerRepository};
use crate::error::GateResult;
use crate::presentation::dto::{
    SubmitScoreRequest, SubmitScoreResponse, ValidateCodeRequest, ValidateCodeResponse,
};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use platform::client::ClientIp;
use std::sync::Arc;

/// Shared state for gate handlers
#[derive(Clone)]
pub struct GateAppState<R>
where
    R: AccessCodeRepository + ScoreLedgerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GateConfig>,
}

/// POST /api/validate-code
pub async fn validate_code<R>(
    State(state): State<GateAppState<R>>,
    ClientIp(client_ip): ClientIp,
    body: Result<Json<ValidateCodeRequest>, JsonRejection>,
) -> GateResult<Json<ValidateCodeResponse>>
where
    R: AccessCodeRepository + ScoreLedgerRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    tracing::debug!(client_ip = ?client_ip, "Access code submitted");

    let use_case = ValidateCodeUseCase::new(state.repo.clone());
    let route = use_case.execute(req.code.as_deref()).await?;

    Ok(Json(ValidateCodeResponse {
        success: true,
        route: route.into_string(),
    }))
}

/// POST /api/submit-score
pub async fn submit_score<R>(
    State(state): State<GateAppState<R>>,
    ClientIp(client_ip): ClientIp,
    body: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> GateResult<Json<SubmitScoreResponse>>
where
    R: AccessCodeRepository + ScoreLedgerRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = SubmitScoreUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(SubmitScoreInput {
            username: req.username,
            total_time: req.total_time,
            final_score: req.final_score,
            client_ip,
        })
        .await?;

    Ok(Json(SubmitScoreResponse {
        success: true,
        message: output.message,
    }))
}
