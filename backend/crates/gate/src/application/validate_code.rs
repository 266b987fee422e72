//! Validate Code Use Case

use crate::domain::repository::AccessCodeRepository;
use crate::domain::value_objects::{AccessCode, Route};
use crate::error::{GateError, GateResult};
use std::sync::Arc;

/// Validate Code Use Case
pub struct ValidateCodeUseCase<A>
where
    A: AccessCodeRepository,
{
    code_repo: Arc<A>,
}

impl<A> ValidateCodeUseCase<A>
where
    A: AccessCodeRepository,
{
    pub fn new(code_repo: Arc<A>) -> Self {
        Self { code_repo }
    }

    /// Resolve a raw, user-typed code to the route it unlocks
    pub async fn execute(&self, raw_code: Option<&str>) -> GateResult<Route> {
        let code = raw_code
            .and_then(AccessCode::parse)
            .ok_or(GateError::MissingAccessCode)?;

        match self.code_repo.resolve(&code).await? {
            Some(route) => {
                tracing::info!(code = %code, route = %route, "Access code accepted");
                Ok(route)
            }
            None => Err(GateError::InvalidAccessCode),
        }
    }
}
