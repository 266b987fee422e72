//! Submit Score Use Case

use crate::application::config::GateConfig;
use crate::domain::entities::CompletionRecord;
use crate::domain::repository::ScoreLedgerRepository;
use crate::domain::value_objects::{FinalScore, ParticipantName, TotalTime};
use crate::error::{GateError, GateResult};
use serde_json::Number;
use std::net::IpAddr;
use std::sync::Arc;

/// Input DTO for submit score
///
/// Every field is optional at this layer: absence is a domain error, not a
/// parse error. A `final_score` of `Some(0)` is present.
#[derive(Debug, Clone, Default)]
pub struct SubmitScoreInput {
    pub username: Option<String>,
    pub total_time: Option<String>,
    pub final_score: Option<Number>,
    /// Logging only
    pub client_ip: Option<IpAddr>,
}

/// Output DTO for submit score
#[derive(Debug, Clone)]
pub struct SubmitScoreOutput {
    pub record: CompletionRecord,
    pub message: String,
}

/// Submit Score Use Case
pub struct SubmitScoreUseCase<L>
where
    L: ScoreLedgerRepository,
{
    ledger_repo: Arc<L>,
    config: Arc<GateConfig>,
}

impl<L> SubmitScoreUseCase<L>
where
    L: ScoreLedgerRepository,
{
    pub fn new(ledger_repo: Arc<L>, config: Arc<GateConfig>) -> Self {
        Self {
            ledger_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitScoreInput) -> GateResult<SubmitScoreOutput> {
        let participant_name = input
            .username
            .as_deref()
            .and_then(ParticipantName::parse)
            .ok_or(GateError::MissingSubmissionData)?;
        let total_time = input
            .total_time
            .as_deref()
            .and_then(TotalTime::parse)
            .ok_or(GateError::MissingSubmissionData)?;
        let final_score = input
            .final_score
            .map(FinalScore::new)
            .ok_or(GateError::MissingSubmissionData)?;

        let record = CompletionRecord::new(participant_name, total_time, final_score);
        self.ledger_repo.append(record.clone()).await?;

        let ledger_size = self.ledger_repo.count().await?;
        tracing::info!(
            record_id = %record.id,
            participant = %record.participant_name,
            total_time = record.total_time.as_str(),
            final_score = %record.final_score,
            client_ip = ?input.client_ip,
            ledger_size,
            "New completion record"
        );

        Ok(SubmitScoreOutput {
            record,
            message: self.config.submission_ack.clone(),
        })
    }
}
