//! Domain Entities

use crate::domain::value_objects::{FinalScore, ParticipantName, TotalTime};
use chrono::{DateTime, Utc};
use kernel::id::RecordId;

/// One finished run on the leaderboard
///
/// Created once per accepted submission and never changed afterwards.
#[derive(Debug, Clone)]
pub struct CompletionRecord {
    pub id: RecordId,
    pub participant_name: ParticipantName,
    pub total_time: TotalTime,
    pub final_score: FinalScore,
    pub recorded_at: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn new(
        participant_name: ParticipantName,
        total_time: TotalTime,
        final_score: FinalScore,
    ) -> Self {
        Self {
            id: RecordId::new(),
            participant_name,
            total_time,
            final_score,
            recorded_at: Utc::now(),
        }
    }
}
