//! Puzzle Completion Coordinator
//!
//! The only path that writes the completion set or stored progress. Each
//! operation holds the session lock from its state check to its last write.

use crate::application::context::PuzzleContext;
use crate::application::room::{EscapeRoom, View};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::{ProgressRecord, Score};
use crate::domain::repository::{GateApi, ProgressRepository};
use crate::domain::session::{Session, SolveOutcome};
use crate::error::{EscapeError, EscapeResult};

impl<P, G> EscapeRoom<P, G>
where
    P: ProgressRepository + Send + Sync + 'static,
    G: GateApi + Send + Sync + 'static,
{
    /// Open a puzzle view
    ///
    /// The puzzle's stored progress is reset to zero on every visit. Without
    /// a running session nothing is written and the view goes back home.
    pub async fn enter_puzzle(&self, id: PuzzleId) -> EscapeResult<PuzzleContext<P, G>> {
        let session = self.inner.session.lock().await;
        let participant = match playable(&session, id) {
            Ok(participant) => participant,
            Err(e) => {
                self.inner.navigate(View::Home);
                return Err(e);
            }
        };

        self.write_record(&participant, id, ProgressRecord::fresh(id))
            .await?;
        self.inner.navigate(View::Puzzle(id));

        tracing::info!(
            participant = %participant,
            puzzle = %id,
            remaining = session.remaining_seconds(),
            "Entered puzzle"
        );
        Ok(PuzzleContext::new(self.clone(), id))
    }

    /// Record a solved puzzle
    ///
    /// Stores `{progress: 100, score}` and marks the puzzle in the session.
    /// Solving the last open puzzle ends the session. Repeating a completion
    /// rewrites the same record, so the total score is unchanged.
    pub async fn complete_puzzle(&self, id: PuzzleId, score: Score) -> EscapeResult<SolveOutcome> {
        let mut session = self.inner.session.lock().await;
        let participant = playable(&session, id)?;

        self.write_record(&participant, id, ProgressRecord::completed(id, score))
            .await?;
        let outcome = session.mark_solved(id, self.inner.clock.now())?;

        match outcome {
            SolveOutcome::AllSolved => {
                self.inner.cancel_ticker();
                tracing::info!(
                    participant = %participant,
                    puzzle = %id,
                    elapsed = %session.elapsed_formatted(),
                    "All puzzles solved"
                );
            }
            SolveOutcome::Solved => {
                tracing::info!(
                    participant = %participant,
                    puzzle = %id,
                    remaining = session.remaining_seconds(),
                    "Puzzle solved"
                );
            }
            SolveOutcome::AlreadySolved => {
                tracing::debug!(participant = %participant, puzzle = %id, "Puzzle solved again");
            }
        }
        Ok(outcome)
    }

    async fn write_record(
        &self,
        identity: &str,
        id: PuzzleId,
        record: ProgressRecord,
    ) -> EscapeResult<()> {
        let _guard = self.inner.progress_lock.lock().await;
        let mut board = self
            .inner
            .progress
            .load(identity, &self.inner.config.catalog)
            .await?;
        board.set(id, record);
        self.inner.progress.save(identity, &board).await
    }
}

/// Participant name when `id` may be played right now
fn playable(session: &Session, id: PuzzleId) -> EscapeResult<String> {
    session.ensure_active()?;
    if !session.catalog().contains(id) {
        return Err(EscapeError::UnknownPuzzle(id.slug().to_string()));
    }
    session
        .participant()
        .map(str::to_string)
        .ok_or(EscapeError::NoActiveSession)
}
