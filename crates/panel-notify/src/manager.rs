use crate::document::ElementRef;
use crate::widget::{WidgetEntry, WidgetRegistry, begin_hide, detach, lock_registry};
use crate::{FlashDocument, FlashMessage, Severity, WidgetHandle, WidgetState, WidgetView};

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A message key stays registered this long; an identical message inside
/// the window is dropped instead of shown twice.
pub const DEDUP_WINDOW: Duration = Duration::from_millis(3000);

/// Exit-transition length; a hiding widget detaches after this delay so the
/// transition is visible before removal.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Extra discovery passes after the immediate one, tolerating pages that
/// assemble their flash containers asynchronously.
pub const DISCOVERY_DELAYS: [Duration; 2] =
    [Duration::from_millis(250), Duration::from_millis(1000)];

/// Document handle shared between staged discovery passes
pub type SharedDocument = Arc<Mutex<FlashDocument>>;

/// Owns every piece of notification state for one page load: the widget
/// registry, the recently-shown keys, and the load-pass guard. Constructed
/// once per page load and passed to callers; cloning shares the state.
#[derive(Clone, Default)]
pub struct NotificationManager {
    recently_shown: Arc<Mutex<HashSet<String>>>,
    widgets: WidgetRegistry,
    next_id: Arc<AtomicU64>,
    load_pass_done: Arc<AtomicBool>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Display a widget with the severity's duration policy.
    ///
    /// Returns `None` when an equal message (same severity, same text after
    /// trim and case folding) was shown within the dedup window.
    pub fn display(&self, text: &str, severity: Severity) -> Option<WidgetHandle> {
        self.display_with_duration(text, severity, severity.default_duration())
    }

    pub fn display_flash(&self, flash: &FlashMessage) -> Option<WidgetHandle> {
        self.display(&flash.text, flash.severity)
    }

    /// Display a widget with an explicit duration. Duration zero persists
    /// until manually dismissed.
    pub fn display_with_duration(
        &self,
        text: &str,
        severity: Severity,
        duration: Duration,
    ) -> Option<WidgetHandle> {
        let normalized = text.trim();
        let key = format!("{}:{}", severity.as_str(), normalized.to_lowercase());

        {
            let mut recent = lock_poisonable(&self.recently_shown);
            if recent.contains(&key) {
                log::debug!("suppressed duplicate notification: {}", normalized);
                return None;
            }
            recent.insert(key.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock_registry(&self.widgets).insert(
            id,
            WidgetEntry {
                text: normalized.to_string(),
                severity,
                duration,
                state: WidgetState::Shown,
            },
        );

        // Unregister the key once the dedup window elapses
        let recently_shown = self.recently_shown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(DEDUP_WINDOW).await;
            lock_poisonable(&recently_shown).remove(&key);
        });

        // Auto-removal in two phases: hide, then detach after the
        // transition delay. The hide is a no-op if the widget was
        // dismissed first; its own dismiss timer finishes the detach.
        if !duration.is_zero() {
            let registry = self.widgets.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                if begin_hide(&registry, id) {
                    tokio::time::sleep(TRANSITION_DELAY).await;
                    detach(&registry, id);
                }
            });
        }

        Some(WidgetHandle {
            id,
            registry: self.widgets.clone(),
        })
    }

    /// Widgets still attached (shown or in their exit transition), in
    /// display order
    pub fn active_widgets(&self) -> Vec<WidgetView> {
        let widgets = lock_registry(&self.widgets);
        let mut views: Vec<WidgetView> = widgets
            .iter()
            .filter(|(_, entry)| entry.state != WidgetState::Removed)
            .map(|(id, entry)| WidgetView {
                id: *id,
                text: entry.text.clone(),
                severity: entry.severity,
                duration_ms: entry.duration.as_millis() as u64,
            })
            .collect();
        views.sort_by_key(|view| view.id);
        views
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// One discovery pass: feed every unprocessed flash source through
    /// `display`, marking sources processed only when a widget was actually
    /// produced. Returns the number of widgets produced.
    pub fn run_discovery(&self, document: &mut FlashDocument) -> usize {
        let mut produced = 0;

        for element_ref in document.candidates() {
            let element = document.get(element_ref);
            if element.is_processed() {
                continue;
            }

            let text = element.text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            let severity = self.classify(document, element_ref, &text);
            if self.display(&text, severity).is_some() {
                document.mark_processed(element_ref);
                produced += 1;
            }
        }

        produced
    }

    /// Staged discovery: an immediate pass plus delayed passes for pages
    /// that assemble asynchronously. Returns what the immediate pass
    /// produced.
    pub fn run_discovery_schedule(&self, document: &SharedDocument) -> usize {
        let produced = self.run_discovery(&mut lock_poisonable(document));

        for delay in DISCOVERY_DELAYS {
            let manager = self.clone();
            let document = document.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                manager.run_discovery(&mut lock_poisonable(&document));
            });
        }

        produced
    }

    /// Fallback pass at full page-load completion. Runs at most once per
    /// manager regardless of how often load completion fires.
    pub fn on_load_complete(&self, document: &SharedDocument) -> usize {
        if self.load_pass_done.swap(true, Ordering::SeqCst) {
            return 0;
        }
        self.run_discovery(&mut lock_poisonable(document))
    }

    /// Class hints on the element, then on its container, then the text
    /// keyword heuristic
    fn classify(&self, document: &FlashDocument, element_ref: ElementRef, text: &str) -> Severity {
        let element = document.get(element_ref);
        Severity::from_class_hints(&element.classes)
            .or_else(|| Severity::from_class_hints(document.container_classes(element_ref)))
            .unwrap_or_else(|| Severity::from_text(text))
    }
}

fn lock_poisonable<T>(mutex: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
