//! Painted Cube Challenge
//!
//! A 5×5×5 cube is painted on the outside and cut into unit cubes. How many
//! of them have exactly two painted faces?

use super::{Attempt, Puzzle, PuzzleError};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;

pub const CUBE_SIZE: u32 = 5;

/// Unit cubes with exactly two painted faces: the non-corner cubes of the
/// 12 edges
pub fn two_face_cubes(edge: u32) -> u32 {
    12 * edge.saturating_sub(2)
}

#[derive(Debug, Clone)]
pub struct PaintedCube {
    edge: u32,
    progress: Percent,
    solved: bool,
}

impl Default for PaintedCube {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintedCube {
    pub fn new() -> Self {
        Self::with_edge(CUBE_SIZE)
    }

    pub fn with_edge(edge: u32) -> Self {
        Self {
            edge,
            progress: Percent::ZERO,
            solved: false,
        }
    }

    pub fn answer(&self) -> u32 {
        two_face_cubes(self.edge)
    }

    pub fn submit(&mut self, raw_guess: &str) -> Result<Attempt, PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        let guess: i64 = raw_guess
            .trim()
            .parse()
            .map_err(|_| PuzzleError::NotANumber)?;

        let answer = i64::from(self.answer());
        if guess == answer {
            self.solved = true;
            self.progress = Percent::FULL;
            return Ok(Attempt::Solved);
        }

        self.progress = Percent::hint(guess as f64 / answer.max(1) as f64 * 100.0);
        Ok(Attempt::Incorrect(format!(
            "Incorrect guess ({guess}). Try again!"
        )))
    }
}

impl Puzzle for PaintedCube {
    const ID: PuzzleId = PuzzleId::PaintedCube;

    fn progress(&self) -> Percent {
        self.progress
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}
