//! Transient status notices
//!
//! Views show a short banner after an action ("Plan saved", "Could not reach
//! the server") that goes away on its own. Only one notice is visible; a new
//! one replaces the old, and a pending dismissal never removes a newer notice.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Arc<Mutex<Option<Notice>>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible notice; returns its id
    pub fn show(&self, kind: NoticeKind, message: impl Into<String>) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = notice.id;
        *self.lock() = Some(notice);
        id
    }

    /// Show a notice and schedule its dismissal
    pub fn flash(&self, kind: NoticeKind, message: impl Into<String>) -> JoinHandle<bool> {
        let id = self.show(kind, message);
        self.dismiss_after(id, DEFAULT_NOTICE_DURATION)
    }

    pub fn current(&self) -> Option<Notice> {
        self.lock().clone()
    }

    /// Remove the notice if it is still `id`; returns whether it was removed
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut current = self.lock();
        if current.as_ref().is_some_and(|notice| notice.id == id) {
            *current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss_after(&self, id: Uuid, after: Duration) -> JoinHandle<bool> {
        let board = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            board.dismiss(id)
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<Notice>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
