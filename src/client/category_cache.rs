//! Category list cache
//!
//! Category lists change rarely, so each kind is kept in persistent storage
//! and shown immediately while a fresh copy is fetched. A fetched list is only
//! written back when its serialized form differs from what is stored, so an
//! unchanged list never causes a write or a re-render.

use crate::client::api::CategoryApi;
use crate::client::error::ClientError;
use crate::client::storage::KeyValueStore;
use crate::shared::models::{Category, CategoryKind};
use std::sync::Arc;

/// Result of committing a fetched list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Unchanged,
    Updated,
}

#[derive(Clone)]
pub struct CategoryCache {
    store: Arc<dyn KeyValueStore>,
}

impl CategoryCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Last stored list for `kind`, possibly stale
    pub fn cached(&self, kind: CategoryKind) -> Option<Vec<Category>> {
        let raw = self.store.get(&kind.storage_key())?;
        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(err) => {
                tracing::warn!("[CACHE] Dropping unreadable {} categories: {}", kind, err);
                None
            }
        }
    }

    /// Store `list` unless the stored payload is byte-identical
    pub fn commit(&self, kind: CategoryKind, list: &[Category]) -> Result<CacheOutcome, ClientError> {
        let key = kind.storage_key();
        let serialized = serde_json::to_string(list)?;
        if self.store.get(&key).as_deref() == Some(serialized.as_str()) {
            tracing::debug!("[CACHE] {} categories unchanged", kind);
            return Ok(CacheOutcome::Unchanged);
        }
        self.store.set(&key, &serialized)?;
        tracing::debug!("[CACHE] {} categories updated ({} entries)", kind, list.len());
        Ok(CacheOutcome::Updated)
    }

    /// Fetch the current list and commit it
    pub async fn revalidate(
        &self,
        kind: CategoryKind,
        api: &CategoryApi,
    ) -> Result<(Vec<Category>, CacheOutcome), ClientError> {
        let fresh = api.list(kind).await?;
        let outcome = self.commit(kind, &fresh)?;
        Ok((fresh, outcome))
    }

    /// Cached list if there is one, otherwise fetch it
    pub async fn load(&self, kind: CategoryKind, api: &CategoryApi) -> Result<Vec<Category>, ClientError> {
        match self.cached(kind) {
            Some(list) => Ok(list),
            None => Ok(self.revalidate(kind, api).await?.0),
        }
    }

    pub fn invalidate(&self, kind: CategoryKind) -> Result<(), ClientError> {
        self.store.remove(&kind.storage_key())?;
        Ok(())
    }
}
