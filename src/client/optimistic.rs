//! # Optimistic Like Updates
//!
//! A like button flips immediately; the server call follows. The ledger keeps
//! the state shown before the flip so a failed call can put it back.
//!
//! ## Usage
//!
//! ```rust
//! use routine_hub::client::optimistic::LikeLedger;
//! use routine_hub::shared::models::LikeStatus;
//!
//! let ledger = LikeLedger::new();
//! let before = LikeStatus { plan_id: 1, liked: false, like_count: 3 };
//!
//! let shown = ledger.apply(before).unwrap();
//! assert!(shown.liked);
//!
//! // the request failed
//! assert_eq!(ledger.rollback(1), Some(before));
//! ```

use crate::client::api::SocialApi;
use crate::client::error::ClientError;
use crate::shared::models::LikeStatus;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Pending like flips keyed by plan id
#[derive(Debug, Default)]
pub struct LikeLedger {
    pending: Mutex<HashMap<i64, LikeStatus>>,
}

impl LikeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` and return the flipped state to display.
    /// Returns `None` while a flip for the same plan is still pending.
    pub fn apply(&self, current: LikeStatus) -> Option<LikeStatus> {
        let mut pending = self.lock();
        if pending.contains_key(&current.plan_id) {
            return None;
        }
        pending.insert(current.plan_id, current);
        Some(current.toggled())
    }

    /// Server accepted the flip
    pub fn confirm(&self, plan_id: i64) {
        self.lock().remove(&plan_id);
    }

    /// Server rejected the flip; returns the state to restore
    pub fn rollback(&self, plan_id: i64) -> Option<LikeStatus> {
        self.lock().remove(&plan_id)
    }

    pub fn is_pending(&self, plan_id: i64) -> bool {
        self.lock().contains_key(&plan_id)
    }

    pub fn pending_count(&self) -> usize {
        self.lock().len()
    }

    /// Flip optimistically, call the server, then confirm or roll back.
    /// `on_change` sees the optimistic state first and, on failure, the
    /// restored one. Returns the server's authoritative state.
    pub async fn toggle(
        &self,
        api: &SocialApi,
        current: LikeStatus,
        mut on_change: impl FnMut(LikeStatus),
    ) -> Result<LikeStatus, ClientError> {
        let Some(shown) = self.apply(current) else {
            tracing::debug!("[LIKE] Plan {} already has a pending toggle", current.plan_id);
            return Ok(current);
        };
        on_change(shown);

        match api.set_like(current.plan_id, shown.liked).await {
            Ok(confirmed) => {
                self.confirm(current.plan_id);
                if confirmed != shown {
                    on_change(confirmed);
                }
                Ok(confirmed)
            }
            Err(err) => {
                tracing::warn!("[LIKE] Toggle on plan {} failed: {}", current.plan_id, err);
                if let Some(previous) = self.rollback(current.plan_id) {
                    on_change(previous);
                }
                Err(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, LikeStatus>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
