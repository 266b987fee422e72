//! In-Memory Repository Implementations

use crate::domain::entities::CompletionRecord;
use crate::domain::repository::{AccessCodeRepository, ScoreLedgerRepository};
use crate::domain::services::{CodeTableError, build_directory};
use crate::domain::value_objects::{AccessCode, Route};
use crate::error::GateResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local repository: a fixed code directory and an append-only ledger
#[derive(Clone)]
pub struct InMemoryGateRepository {
    directory: Arc<HashMap<AccessCode, Route>>,
    ledger: Arc<RwLock<Vec<CompletionRecord>>>,
}

impl InMemoryGateRepository {
    /// Build from `(code, route)` pairs
    pub fn new<'a, I>(codes: I) -> Result<Self, CodeTableError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Ok(Self {
            directory: Arc::new(build_directory(codes)?),
            ledger: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn code_count(&self) -> usize {
        self.directory.len()
    }

    pub async fn record_count(&self) -> usize {
        self.ledger.read().await.len()
    }
}

impl AccessCodeRepository for InMemoryGateRepository {
    async fn resolve(&self, code: &AccessCode) -> GateResult<Option<Route>> {
        Ok(self.directory.get(code).cloned())
    }
}

impl ScoreLedgerRepository for InMemoryGateRepository {
    async fn append(&self, record: CompletionRecord) -> GateResult<()> {
        self.ledger.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> GateResult<Vec<CompletionRecord>> {
        Ok(self.ledger.read().await.clone())
    }

    async fn count(&self) -> GateResult<usize> {
        Ok(self.ledger.read().await.len())
    }
}
