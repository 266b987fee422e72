//! Repository Traits
//!
//! Interfaces for persistence and the remote gate. Implementations are in the
//! infra layer.

use crate::domain::catalog::Catalog;
use crate::domain::progress::ProgressBoard;
use crate::domain::submission::ScoreSubmission;
use crate::error::EscapeResult;

/// Persisted per-identity progress
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Board for an identity; missing or unreadable data yields an empty board
    async fn load(&self, identity: &str, catalog: &Catalog) -> EscapeResult<ProgressBoard>;

    async fn save(&self, identity: &str, board: &ProgressBoard) -> EscapeResult<()>;

    /// Stable id for a player who has not given a name, created on first use
    async fn anonymous_identity(&self) -> EscapeResult<String>;
}

/// The access-code and score-ledger server
#[trait_variant::make(GateApi: Send)]
pub trait LocalGateApi {
    /// Resolve a code to the route it unlocks
    async fn validate_code(&self, code: &str) -> EscapeResult<String>;

    /// Record a finished run; returns the server's acknowledgement
    async fn submit_score(&self, submission: &ScoreSubmission) -> EscapeResult<String>;
}
