//! Infrastructure Layer
//!
//! Repository implementations: key-value progress storage and the HTTP gate
//! client.

pub mod http;
pub mod progress_store;
