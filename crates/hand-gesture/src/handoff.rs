//! Single-slot handoff between the sampling thread and the frame loop
//!
//! The writer replaces the whole value; the reader copies out whatever is
//! newest. Neither side ever waits on the other for longer than one copy.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared "latest value" cell; clones share the same slot
#[derive(Debug, Default)]
pub struct LatestSlot<T> {
    inner: Arc<Mutex<SlotInner<T>>>,
}

#[derive(Debug, Default)]
struct SlotInner<T> {
    value: T,
    version: u64,
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Copy> LatestSlot<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                value: initial,
                version: 0,
            })),
        }
    }

    /// Replace the value wholesale
    pub fn publish(&self, value: T) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        slot.value = value;
        slot.version += 1;
    }

    /// Copy of the newest value
    pub fn latest(&self) -> T {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).value
    }

    /// Newest value and the number of publishes so far
    pub fn latest_versioned(&self) -> (T, u64) {
        let slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        (slot.value, slot.version)
    }
}
