//! Application Layer - Session controller and use cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod context;
pub mod coordinator;
pub mod room;
pub mod submission;
