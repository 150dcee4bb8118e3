// src/detect/cell.rs

use std::sync::{Arc, PoisonError, RwLock};

use super::Capabilities;

/// Explicitly initialised, resettable slot for detected capabilities.
///
/// Values are computed at most once between two [`reset`](Self::reset)
/// calls, and every reader gets the same `Arc`. Resetting while dialogs are
/// being constructed on other threads must be serialised by the caller: a
/// dialog may observe either the old or the new value.
#[derive(Debug)]
pub struct CapabilityCell {
    slot: RwLock<Option<Arc<Capabilities>>>,
}

impl CapabilityCell {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Current value, if computed.
    pub fn get(&self) -> Option<Arc<Capabilities>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return the cached value, computing it with `probe` on first use.
    pub fn get_or_init(&self, probe: impl FnOnce() -> Capabilities) -> Arc<Capabilities> {
        if let Some(caps) = self.get() {
            return caps;
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have filled the slot while we waited.
        if let Some(caps) = slot.as_ref() {
            return Arc::clone(caps);
        }
        let caps = Arc::new(probe());
        *slot = Some(Arc::clone(&caps));
        caps
    }

    /// Forget the cached value; the next `get_or_init` probes again.
    pub fn reset(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Default for CapabilityCell {
    fn default() -> Self {
        Self::new()
    }
}
