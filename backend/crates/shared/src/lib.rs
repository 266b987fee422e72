//! Shared Kernel - vocabulary shared by the server and the client core
//!
//! This crate holds the few things every RiddlEscape crate agrees on:
//! - The unified error type ([`error::app_error::AppError`]) and its
//!   classification ([`error::kind::ErrorKind`])
//! - Typed identifiers for ledger records
//!
//! Nothing domain-specific lives here; puzzles, sessions and access codes
//! belong to their own crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
