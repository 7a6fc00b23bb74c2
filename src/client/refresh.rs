//! Token refresh coalescing
//!
//! When an authenticated request comes back 401 the access token has expired.
//! However many requests observe that at the same time, exactly one reissue
//! call goes out: the first caller becomes the leader and performs it, every
//! later caller parks a oneshot sender in the waiter list and receives the
//! leader's outcome.
//!
//! On success the new token is stored before waiters are woken (in insertion
//! order). On failure the session is cleared once, the navigator is sent to
//! the login route, and every waiter receives the same error. Nothing here
//! retries; the HTTP wrapper resends the original request once.
//!
//! ```text
//! request A ─401─┐
//! request B ─401─┼─> TokenRefresher ──(one call)──> Reissuer
//! request C ─401─┘         │
//!                          └─> Ok(token) | Err(RefreshError) to A, B and C
//! ```

use crate::client::error::RefreshError;
use crate::client::routes::{Navigator, Route};
use crate::client::session::Session;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

/// Network port performing the actual reissue call
#[async_trait]
pub trait Reissuer: Send + Sync {
    /// Exchange the refresh credential for a new access token.
    /// `expired` is the token the server just rejected.
    async fn reissue(&self, expired: Option<&str>) -> Result<String, RefreshError>;
}

type Waiter = oneshot::Sender<Result<String, RefreshError>>;

#[derive(Default)]
struct Flight {
    in_progress: bool,
    waiters: Vec<Waiter>,
}

enum Turn {
    /// Session already holds a newer token than the rejected one
    AlreadyFresh(String),
    /// Session was cleared after the request went out
    SignedOut,
    Lead,
    Wait(oneshot::Receiver<Result<String, RefreshError>>),
}

pub struct TokenRefresher {
    reissuer: Arc<dyn Reissuer>,
    session: Session,
    navigator: Arc<dyn Navigator>,
    flight: Mutex<Flight>,
    reissue_calls: AtomicU64,
}

impl TokenRefresher {
    pub fn new(
        reissuer: Arc<dyn Reissuer>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            reissuer,
            session,
            navigator,
            flight: Mutex::new(Flight::default()),
            reissue_calls: AtomicU64::new(0),
        }
    }

    /// Number of reissue calls made so far
    pub fn reissue_calls(&self) -> u64 {
        self.reissue_calls.load(Ordering::SeqCst)
    }

    pub fn in_progress(&self) -> bool {
        self.lock().in_progress
    }

    /// Obtain a fresh access token after `expired` was rejected
    pub async fn refresh(&self, expired: Option<&str>) -> Result<String, RefreshError> {
        match self.take_turn(expired) {
            Turn::AlreadyFresh(token) => {
                tracing::debug!("[REFRESH] Token already reissued, reusing it");
                Ok(token)
            }
            Turn::SignedOut => Err(RefreshError::SignedOut),
            Turn::Wait(rx) => {
                tracing::debug!("[REFRESH] Refresh in flight, waiting");
                rx.await.unwrap_or(Err(RefreshError::Abandoned))
            }
            Turn::Lead => {
                let guard = LeaderGuard { refresher: self, done: false };
                self.reissue_calls.fetch_add(1, Ordering::SeqCst);
                tracing::info!("[REFRESH] Reissuing access token");
                let result = self.reissuer.reissue(expired).await;
                guard.finish(result)
            }
        }
    }

    fn take_turn(&self, expired: Option<&str>) -> Turn {
        let mut flight = self.lock();
        if flight.in_progress {
            let (tx, rx) = oneshot::channel();
            flight.waiters.push(tx);
            return Turn::Wait(rx);
        }
        match (expired, self.session.access_token()) {
            (Some(expired), Some(current)) if current != expired => {
                return Turn::AlreadyFresh(current);
            }
            (Some(_), None) => return Turn::SignedOut,
            _ => {}
        }
        flight.in_progress = true;
        Turn::Lead
    }

    fn lock(&self) -> MutexGuard<'_, Flight> {
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish the leader's outcome; runs exactly once per flight
    fn settle(&self, result: &Result<String, RefreshError>) {
        let waiters = {
            let mut flight = self.lock();
            match result {
                Ok(token) => {
                    if let Err(err) = self.session.set_access_token(token) {
                        tracing::warn!("[REFRESH] Could not persist reissued token: {}", err);
                    }
                }
                Err(RefreshError::Abandoned) => {}
                Err(err) => {
                    tracing::warn!("[REFRESH] Reissue failed, signing out: {}", err);
                    if let Err(err) = self.session.clear() {
                        tracing::warn!("[REFRESH] Could not clear session: {}", err);
                    }
                }
            }
            flight.in_progress = false;
            std::mem::take(&mut flight.waiters)
        };

        if matches!(result, Err(err) if *err != RefreshError::Abandoned) {
            self.navigator.navigate(Route::Login);
        }

        tracing::debug!("[REFRESH] Waking {} waiting request(s)", waiters.len());
        for waiter in waiters {
            // A waiter whose request was dropped is simply gone
            let _ = waiter.send(result.clone());
        }
    }
}

/// Resets the flight if the leading future is dropped mid-reissue
struct LeaderGuard<'a> {
    refresher: &'a TokenRefresher,
    done: bool,
}

impl LeaderGuard<'_> {
    fn finish(mut self, result: Result<String, RefreshError>) -> Result<String, RefreshError> {
        self.done = true;
        self.refresher.settle(&result);
        result
    }
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::warn!("[REFRESH] Leader dropped before reissue completed");
            self.refresher.settle(&Err(RefreshError::Abandoned));
        }
    }
}
