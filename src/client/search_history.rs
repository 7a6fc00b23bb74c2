//! Recent-search history
//!
//! Each searchable feature keeps its own most-recent-first list of terms in
//! persistent storage. Searching a term again moves it to the front instead
//! of duplicating it, and the list never grows past the configured cap.

use crate::client::error::ClientError;
use crate::client::storage::KeyValueStore;
use std::sync::Arc;

/// Feature owning a history list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Plans,
    Users,
    AdminUsers,
}

impl SearchScope {
    pub fn storage_key(self) -> &'static str {
        match self {
            SearchScope::Plans => "recentSearch:plans",
            SearchScope::Users => "recentSearch:users",
            SearchScope::AdminUsers => "recentSearch:adminUsers",
        }
    }
}

#[derive(Clone)]
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
    scope: SearchScope,
    limit: usize,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>, scope: SearchScope, limit: usize) -> Self {
        Self {
            store,
            scope,
            limit: limit.max(1),
        }
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Stored terms, most recent first
    pub fn terms(&self) -> Vec<String> {
        self.store
            .get(self.scope.storage_key())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Put `term` at the front; returns the updated list
    pub fn record(&self, term: &str) -> Result<Vec<String>, ClientError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(self.terms());
        }
        let terms = push_recent(self.terms(), term, self.limit);
        self.save(&terms)?;
        Ok(terms)
    }

    pub fn remove(&self, term: &str) -> Result<Vec<String>, ClientError> {
        let mut terms = self.terms();
        terms.retain(|existing| existing != term);
        self.save(&terms)?;
        Ok(terms)
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.remove(self.scope.storage_key())?;
        Ok(())
    }

    fn save(&self, terms: &[String]) -> Result<(), ClientError> {
        self.store
            .set(self.scope.storage_key(), &serde_json::to_string(terms)?)?;
        Ok(())
    }
}

/// Move-to-front insert with eviction of the oldest entries past `limit`
pub fn push_recent(mut terms: Vec<String>, term: &str, limit: usize) -> Vec<String> {
    terms.retain(|existing| existing != term);
    terms.insert(0, term.to_string());
    terms.truncate(limit);
    terms
}
