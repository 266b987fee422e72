//! Repository Traits
//!
//! Interfaces for lookup and persistence. Implementation is in the infra layer.

use crate::domain::entities::CompletionRecord;
use crate::domain::value_objects::{AccessCode, Route};
use crate::error::GateResult;

/// Access-code directory trait
#[trait_variant::make(AccessCodeRepository: Send)]
pub trait LocalAccessCodeRepository {
    /// Look up the route a code unlocks. Codes are never consumed.
    async fn resolve(&self, code: &AccessCode) -> GateResult<Option<Route>>;
}

/// Score ledger trait
#[trait_variant::make(ScoreLedgerRepository: Send)]
pub trait LocalScoreLedgerRepository {
    /// Append a record; existing records are never touched
    async fn append(&self, record: CompletionRecord) -> GateResult<()>;

    /// All records in submission order
    async fn list(&self) -> GateResult<Vec<CompletionRecord>>;

    /// Number of records
    async fn count(&self) -> GateResult<usize>;
}
