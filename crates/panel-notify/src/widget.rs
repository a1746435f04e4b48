use crate::Severity;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

/// Lifecycle of one widget: `Shown → Hiding → Removed`. Hiding is the exit
/// transition window; the element is still attached during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Shown,
    Hiding,
    Removed,
}

#[derive(Debug)]
pub(crate) struct WidgetEntry {
    pub text: String,
    pub severity: Severity,
    pub duration: Duration,
    pub state: WidgetState,
}

pub(crate) type WidgetRegistry = Arc<Mutex<HashMap<u64, WidgetEntry>>>;

/// Widget state stays usable even if a timer task panicked mid-update
pub(crate) fn lock_registry(registry: &WidgetRegistry) -> MutexGuard<'_, HashMap<u64, WidgetEntry>> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Render data for one attached widget
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

/// Handle to a displayed widget; the manual close control calls `dismiss`.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    pub(crate) id: u64,
    pub(crate) registry: WidgetRegistry,
}

impl WidgetHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> WidgetState {
        lock_registry(&self.registry)
            .get(&self.id)
            .map(|entry| entry.state)
            .unwrap_or(WidgetState::Removed)
    }

    /// Manual dismissal: starts the exit transition now, detaches after the
    /// fixed transition delay. The pending auto-removal timer, if any,
    /// becomes a no-op.
    pub fn dismiss(&self) {
        if begin_hide(&self.registry, self.id) {
            let registry = self.registry.clone();
            let id = self.id;
            tokio::spawn(async move {
                tokio::time::sleep(crate::TRANSITION_DELAY).await;
                detach(&registry, id);
            });
        }
    }
}

/// Shown → Hiding. Returns false when the widget already left the Shown
/// state, making stale timers no-ops.
pub(crate) fn begin_hide(registry: &WidgetRegistry, id: u64) -> bool {
    let mut widgets = lock_registry(registry);
    match widgets.get_mut(&id) {
        Some(entry) if entry.state == WidgetState::Shown => {
            entry.state = WidgetState::Hiding;
            true
        }
        _ => false,
    }
}

/// Hiding → Removed
pub(crate) fn detach(registry: &WidgetRegistry, id: u64) {
    let mut widgets = lock_registry(registry);
    if let Some(entry) = widgets.get_mut(&id) {
        if entry.state == WidgetState::Hiding {
            entry.state = WidgetState::Removed;
        }
    }
}
