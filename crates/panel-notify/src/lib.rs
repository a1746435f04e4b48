//! Notification subsystem for the admin panel
//!
//! Surfaces flash messages as transient, dismissible widgets. All state
//! lives on a [`NotificationManager`] instance constructed once per page
//! load; there are no module-level registries.

mod document;
mod flash;
mod manager;
mod severity;
mod widget;

pub use document::{FlashDocument, FlashElement};
pub use flash::FlashMessage;
pub use manager::{
    DEDUP_WINDOW, DISCOVERY_DELAYS, NotificationManager, SharedDocument, TRANSITION_DELAY,
};
pub use severity::Severity;
pub use widget::{WidgetHandle, WidgetState, WidgetView};

#[cfg(test)]
mod tests;
