//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Key-value persistence (in-memory and JSON file backends)
//! - Wall clock abstraction
//! - Random identifier generation
//! - Client address extraction for HTTP handlers

pub mod client;
pub mod clock;
pub mod ident;
pub mod storage;
