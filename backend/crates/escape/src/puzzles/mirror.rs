//! Mirror Typing
//!
//! Everything typed is shown reversed. The riddle's answer is ECHO, so the
//! participant has to type it backwards.

use super::{Attempt, Puzzle, PuzzleError};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;

pub const RIDDLE: &str = "SEVLA EES TUOHTIW, SEVLA SEES TI. YLLAUSIV TIHSGNIUGNITSID NAC UOY NEHW SUTATS YM YDUTS.";
pub const EXPECTED_INPUT: &str = "OHCE";
pub const MAX_LEN: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct MirrorTyping {
    input: String,
    progress: Percent,
    solved: bool,
}

impl MirrorTyping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the typed text; upper-cased and cut to [`MAX_LEN`] characters
    pub fn set_input(&mut self, raw: &str) -> Result<(), PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        self.input = raw.to_uppercase().chars().take(MAX_LEN).collect();
        self.progress = Percent::hint(
            self.input.chars().count() as f64 / MAX_LEN as f64 * 100.0,
        );
        Ok(())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// What the screen shows
    pub fn displayed(&self) -> String {
        self.input.chars().rev().collect()
    }

    pub fn submit(&mut self) -> Result<Attempt, PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        if self.input == EXPECTED_INPUT {
            self.solved = true;
            self.progress = Percent::FULL;
            Ok(Attempt::Solved)
        } else {
            Ok(Attempt::Incorrect(format!(
                "Incorrect. The displayed text is: {}. Keep trying!",
                self.displayed()
            )))
        }
    }
}

impl Puzzle for MirrorTyping {
    const ID: PuzzleId = PuzzleId::MirrorTyping;

    fn progress(&self) -> Percent {
        self.progress
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}
