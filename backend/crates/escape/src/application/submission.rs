//! Unlocking and Score Submission
//!
//! The two operations that talk to the gate server. Neither holds the session
//! lock across a network call.

use crate::application::context::PuzzleContext;
use crate::application::room::EscapeRoom;
use crate::domain::catalog::PuzzleId;
use crate::domain::repository::{GateApi, ProgressRepository};
use crate::domain::submission::ScoreSubmission;
use crate::error::{EscapeError, EscapeResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Clears the in-flight flag however the submission ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> EscapeResult<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            return Err(EscapeError::SubmissionInFlight);
        }
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P, G> EscapeRoom<P, G>
where
    P: ProgressRepository + Send + Sync + 'static,
    G: GateApi + Send + Sync + 'static,
{
    /// Trade an access code for the puzzle it opens, and enter it
    pub async fn unlock(&self, code: &str) -> EscapeResult<PuzzleContext<P, G>> {
        let code = code.trim();
        if code.is_empty() {
            return Err(EscapeError::EmptyAccessCode);
        }
        self.inner.session.lock().await.ensure_active()?;

        let route = self.inner.gate.validate_code(code).await?;
        let id = PuzzleId::from_route(&route)
            .filter(|id| self.inner.config.catalog.contains(*id))
            .ok_or_else(|| EscapeError::UnknownPuzzle(route.clone()))?;

        tracing::info!(route = %route, puzzle = %id, "Access code accepted");
        self.enter_puzzle(id).await
    }

    /// Send the finished run to the ledger, then reset for the next player
    ///
    /// Only one submission may be in flight. On a transport failure the
    /// session is left untouched so the call can be retried.
    pub async fn submit_score(&self) -> EscapeResult<String> {
        let _in_flight = InFlight::acquire(&self.inner.submitting)?;

        let (submission, run_id) = {
            let session = self.inner.session.lock().await;
            let participant = session
                .participant()
                .map(str::to_string)
                .ok_or(EscapeError::NoActiveSession)?;
            if !session.is_ended() {
                return Err(EscapeError::SessionInProgress);
            }
            let board = self
                .inner
                .progress
                .load(&participant, &self.inner.config.catalog)
                .await?;
            let submission = ScoreSubmission {
                username: participant,
                total_time: session.elapsed_formatted(),
                final_score: board.total_score(),
            };
            (submission, session.run_id())
        };

        let message = match self.inner.gate.submit_score(&submission).await {
            Ok(message) => message,
            Err(e) => {
                e.log();
                return Err(e);
            }
        };

        tracing::info!(
            participant = %submission.username,
            total_time = %submission.total_time,
            final_score = submission.final_score,
            "Score submitted"
        );

        // A new run started meanwhile is not ours to reset.
        self.reset_if(run_id).await;
        Ok(message)
    }
}
