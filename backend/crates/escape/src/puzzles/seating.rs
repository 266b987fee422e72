//! Seating Arrangement

use super::{Attempt, Puzzle, PuzzleError};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;

pub const QUESTION: &str = "Five friends are sitting in a row. Anna is to the left of Bob but to the right of Carol. Dave is to the right of Bob. Emily is between Bob and Dave. Who is sitting at the far left?";
pub const ANSWER_OPTIONS: &str = "a) Anna, b) Bob, c) Carol, d) Dave.";
pub const ANSWER: &str = "CAROL";

#[derive(Debug, Clone, Default)]
pub struct SeatingArrangement {
    input: String,
    progress: Percent,
    solved: bool,
}

impl SeatingArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, raw: &str) -> Result<(), PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        self.input = raw.to_string();
        self.progress = Percent::hint(self.input.chars().count() as f64 * 15.0);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<Attempt, PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        let answer = self.input.trim().to_uppercase();
        if answer.is_empty() {
            return Err(PuzzleError::EmptyAnswer);
        }

        if answer == ANSWER {
            self.solved = true;
            self.progress = Percent::FULL;
            Ok(Attempt::Solved)
        } else {
            self.progress = Percent::new(50.0);
            Ok(Attempt::Incorrect(
                "Incorrect name entered. Review the clues carefully!".to_string(),
            ))
        }
    }
}

impl Puzzle for SeatingArrangement {
    const ID: PuzzleId = PuzzleId::SeatingArrangement;

    fn progress(&self) -> Percent {
        self.progress
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}
