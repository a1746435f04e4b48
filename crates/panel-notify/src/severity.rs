use std::time::Duration;

use serde::Serialize;

/// How long an error widget stays on screen
const ERROR_DURATION: Duration = Duration::from_millis(6000);
/// How long every other widget stays on screen
const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Class-name fragments that betray a severity, checked in this order
const ERROR_CLASS_HINTS: [&str; 3] = ["error", "danger", "erro"];
const SUCCESS_CLASS_HINTS: [&str; 2] = ["success", "sucesso"];
const WARNING_CLASS_HINTS: [&str; 3] = ["warning", "warn", "atencao"];
const INFO_CLASS_HINTS: [&str; 1] = ["info"];

/// Keyword heuristics applied to the message text when class hints are
/// absent. Backend messages are Portuguese, panel messages may be English.
const ERROR_KEYWORDS: [&str; 9] = [
    "erro",
    "error",
    "inválid",
    "invalid",
    "falh",
    "fail",
    "não encontrado",
    "nao encontrado",
    "not found",
];
const SUCCESS_KEYWORDS: [&str; 10] = [
    "sucesso",
    "success",
    "cadastrado",
    "registered",
    "atualizado",
    "updated",
    "criado",
    "created",
    "bem-vindo",
    "welcome",
];
const WARNING_KEYWORDS: [&str; 6] = [
    "atenção",
    "atencao",
    "warning",
    "attention",
    "cuidado",
    "caution",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Display duration policy: errors linger a little longer
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Error => ERROR_DURATION,
            _ => DEFAULT_DURATION,
        }
    }

    /// Classify from CSS class names, e.g. `alert-danger` reads as error.
    pub fn from_class_hints<S: AsRef<str>>(classes: &[S]) -> Option<Severity> {
        let matches = |hints: &[&str]| {
            classes
                .iter()
                .any(|class| hints.iter().any(|hint| class.as_ref().contains(hint)))
        };

        if matches(&ERROR_CLASS_HINTS) {
            Some(Severity::Error)
        } else if matches(&SUCCESS_CLASS_HINTS) {
            Some(Severity::Success)
        } else if matches(&WARNING_CLASS_HINTS) {
            Some(Severity::Warning)
        } else if matches(&INFO_CLASS_HINTS) {
            Some(Severity::Info)
        } else {
            None
        }
    }

    /// Classify from message text. Best-effort keyword matching; callers
    /// must not rely on it being correct for arbitrary prose.
    pub fn from_text(text: &str) -> Severity {
        let lowered = text.to_lowercase();
        let contains = |keywords: &[&str]| keywords.iter().any(|kw| lowered.contains(kw));

        if contains(&ERROR_KEYWORDS) {
            Severity::Error
        } else if contains(&SUCCESS_KEYWORDS) {
            Severity::Success
        } else if contains(&WARNING_KEYWORDS) {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}
