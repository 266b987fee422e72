//! Key-Value Progress Repository

use crate::application::config::EscapeConfig;
use crate::domain::catalog::Catalog;
use crate::domain::progress::ProgressBoard;
use crate::domain::repository::ProgressRepository;
use crate::error::EscapeResult;
use platform::ident::random_base36;
use platform::storage::KeyValueStore;

/// Progress kept in a [`KeyValueStore`], one JSON document per identity
#[derive(Debug, Clone)]
pub struct KvProgressRepository<S> {
    store: S,
    key_prefix: String,
    anonymous_id_key: String,
    anonymous_id_len: usize,
}

impl<S> KvProgressRepository<S> {
    pub fn new(store: S, config: &EscapeConfig) -> Self {
        Self {
            store,
            key_prefix: config.progress_key_prefix.clone(),
            anonymous_id_key: config.anonymous_id_key.clone(),
            anonymous_id_len: config.anonymous_id_len,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn key(&self, identity: &str) -> String {
        format!("{}{}", self.key_prefix, identity)
    }
}

impl<S> ProgressRepository for KvProgressRepository<S>
where
    S: KeyValueStore + Sync,
{
    async fn load(&self, identity: &str, catalog: &Catalog) -> EscapeResult<ProgressBoard> {
        match self.store.get(&self.key(identity)).await? {
            Some(raw) => Ok(ProgressBoard::from_json(&raw, catalog)),
            None => Ok(ProgressBoard::empty(catalog)),
        }
    }

    async fn save(&self, identity: &str, board: &ProgressBoard) -> EscapeResult<()> {
        let json = board.to_json()?;
        self.store.set(&self.key(identity), &json).await?;
        Ok(())
    }

    async fn anonymous_identity(&self) -> EscapeResult<String> {
        if let Some(existing) = self.store.get(&self.anonymous_id_key).await? {
            if !existing.trim().is_empty() {
                return Ok(existing);
            }
        }

        let id = random_base36(self.anonymous_id_len);
        self.store.set(&self.anonymous_id_key, &id).await?;
        tracing::info!(anonymous_id = %id, "Issued anonymous player id");
        Ok(id)
    }
}
