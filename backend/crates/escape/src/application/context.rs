//! Puzzle Context
//!
//! What a puzzle view may do: read the session, re-enter its puzzle, report
//! completion. Nothing else of the room is reachable from here.

use crate::application::room::EscapeRoom;
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Score;
use crate::domain::repository::{GateApi, ProgressRepository};
use crate::domain::session::{SessionSnapshot, SolveOutcome};
use crate::error::EscapeResult;

pub struct PuzzleContext<P, G> {
    room: EscapeRoom<P, G>,
    puzzle: PuzzleId,
}

impl<P, G> Clone for PuzzleContext<P, G> {
    fn clone(&self) -> Self {
        Self {
            room: self.room.clone(),
            puzzle: self.puzzle,
        }
    }
}

impl<P, G> PuzzleContext<P, G>
where
    P: ProgressRepository + Send + Sync + 'static,
    G: GateApi + Send + Sync + 'static,
{
    pub(crate) fn new(room: EscapeRoom<P, G>, puzzle: PuzzleId) -> Self {
        Self { room, puzzle }
    }

    pub fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    pub async fn session(&self) -> SessionSnapshot {
        self.room.snapshot().await
    }

    pub async fn participant(&self) -> Option<String> {
        self.session().await.participant
    }

    pub async fn remaining_seconds(&self) -> u32 {
        self.session().await.remaining_seconds
    }

    pub async fn is_game_over(&self) -> bool {
        self.session().await.is_game_over()
    }

    /// Restart this puzzle from zero
    pub async fn enter(&self) -> EscapeResult<()> {
        self.room.enter_puzzle(self.puzzle).await.map(|_| ())
    }

    /// Report this puzzle solved
    pub async fn complete(&self, score: Score) -> EscapeResult<SolveOutcome> {
        self.room.complete_puzzle(self.puzzle, score).await
    }
}
