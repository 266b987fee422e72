//! Puzzle Answer Checkers
//!
//! Each puzzle keeps its own state and progress hint. Nothing here touches
//! the session: a view reports success through its
//! [`PuzzleContext`](crate::application::context::PuzzleContext) once
//! [`Puzzle::is_solved`] turns true.

pub mod calculator;
pub mod maze;
pub mod mirror;
pub mod painted_cube;
pub mod seating;

use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;
use thiserror::Error;

pub use calculator::BrokenCalculator;
pub use maze::InvisibleMaze;
pub use mirror::MirrorTyping;
pub use painted_cube::PaintedCube;
pub use seating::SeatingArrangement;

/// Result of checking an answer
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    Solved,
    /// Wrong answer, with the message to show
    Incorrect(String),
}

impl Attempt {
    pub fn is_solved(&self) -> bool {
        matches!(self, Attempt::Solved)
    }
}

/// Input a puzzle refuses; it never ends the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("The {0} key is broken.")]
    BrokenKey(char),

    #[error("There is no {0} key.")]
    UnknownKey(char),

    #[error("Expression cannot be empty.")]
    EmptyExpression,

    #[error("Invalid expression! Check your syntax.")]
    InvalidExpression,

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Please enter an answer.")]
    EmptyAnswer,

    #[error("Puzzle already solved.")]
    AlreadySolved,
}

/// Common surface of the puzzle views
pub trait Puzzle {
    const ID: PuzzleId;

    /// Progress hint; 100 only once solved
    fn progress(&self) -> Percent;

    fn is_solved(&self) -> bool;

    /// Code shown on the success screen, once earned
    fn revealed_code(&self) -> Option<&'static str> {
        if self.is_solved() {
            Some(Self::ID.completion_code())
        } else {
            None
        }
    }
}
