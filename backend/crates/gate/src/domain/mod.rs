//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CompletionRecord)
//! - Domain value objects (AccessCode, Route, ParticipantName, TotalTime, FinalScore)
//! - Domain services (code table construction)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
