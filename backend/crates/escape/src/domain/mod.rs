//! Domain Layer - Game state and rules
//!
//! This layer contains:
//! - The puzzle catalog and per-session completion set
//! - The session state machine (timer, end conditions, elapsed time)
//! - Persisted progress records
//! - Repository traits (interfaces)

pub mod catalog;
pub mod completion;
pub mod progress;
pub mod repository;
pub mod session;
pub mod submission;
