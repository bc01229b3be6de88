//! Generation session gating.
//!
//! At most one generation session may run per gate. Acquisition hands out
//! an RAII guard; dropping the guard releases the gate on every exit path,
//! so a failed session never wedges future ones.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vaultscribe_core::{Error, Result};

/// Gate enforcing at most one concurrent generation session.
#[derive(Debug, Clone, Default)]
pub struct GenerationGate {
    busy: Arc<AtomicBool>,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the gate, or reject with [`Error::SessionBusy`] when a
    /// session is already running.
    pub fn acquire(&self) -> Result<SessionGuard> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(Error::SessionBusy);
        }
        Ok(SessionGuard {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Whether a session currently holds the gate.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one generation session.
#[derive(Debug)]
pub struct SessionGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
