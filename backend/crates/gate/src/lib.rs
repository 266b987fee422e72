//! Gate - access codes and the score ledger
//!
//! Clean Architecture structure:
//! - `domain/` - Access codes, completion records, repository traits
//! - `application/` - Use cases (validate a code, submit a score)
//! - `infra/` - In-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Trust Model
//! - Access codes are advisory navigation, not authorization: a code resolves
//!   every time it is entered and nothing checks that the previous puzzle was
//!   actually solved
//! - The ledger lives in process memory only and is lost on restart

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use error::{GateError, GateResult};
pub use infra::memory::InMemoryGateRepository;
pub use presentation::router::{gate_router, gate_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
