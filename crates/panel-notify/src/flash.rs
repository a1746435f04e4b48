use crate::Severity;

use serde::Serialize;

/// A flash message produced by a route handler after an API call outcome.
///
/// Queued on the session, consumed exactly once by the rendering layer,
/// then handed to the notification manager.
#[derive(Debug, Clone, Serialize)]
pub struct FlashMessage {
    pub text: String,
    pub severity: Severity,
}

impl FlashMessage {
    pub fn new<S: Into<String>>(text: S, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn success<S: Into<String>>(text: S) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self::new(text, Severity::Error)
    }

    pub fn warning<S: Into<String>>(text: S) -> Self {
        Self::new(text, Severity::Warning)
    }

    pub fn info<S: Into<String>>(text: S) -> Self {
        Self::new(text, Severity::Info)
    }
}
