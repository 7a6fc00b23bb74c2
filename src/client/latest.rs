//! Latest-response guard
//!
//! When the same view fires several requests in a row (typing in a search
//! box), responses can arrive out of order. A `LatestSlot` hands out a ticket
//! per request and only accepts the value carried by the newest ticket.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct LatestSlot<T> {
    issued: AtomicU64,
    value: Mutex<Option<T>>,
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self {
            issued: AtomicU64::new(0),
            value: Mutex::new(None),
        }
    }
}

impl<T: Clone> LatestSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a request about to be sent
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Store `value` if `ticket` is still the newest; returns whether it was kept
    pub fn commit(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.is_current(ticket) {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn get(&self) -> Option<T> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
