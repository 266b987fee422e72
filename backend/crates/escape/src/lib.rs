//! Escape - the client core of the escape room
//!
//! Clean Architecture structure:
//! - `domain/` - Catalog, session state machine, progress records, repository traits
//! - `application/` - Session/timer controller, completion coordinator, submission
//! - `infra/` - Key-value progress storage, HTTP gate client
//! - `puzzles/` - Answer checkers for the five puzzles
//!
//! A UI shell owns one [`EscapeRoom`], starts a session with the participant's
//! name, unlocks puzzles with access codes and hands each puzzle view the
//! [`PuzzleContext`] it gets back.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod puzzles;

// Re-exports for convenience
pub use application::config::EscapeConfig;
pub use application::context::PuzzleContext;
pub use application::room::{EscapeRoom, View};
pub use domain::catalog::{Catalog, PuzzleId};
pub use domain::progress::{Percent, ProgressBoard, ProgressRecord, Score};
pub use domain::session::{EndReason, RunId, SessionSnapshot, SolveOutcome, TickOutcome};
pub use error::{EscapeError, EscapeResult};
pub use infra::http::HttpGateClient;
pub use infra::progress_store::KvProgressRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
