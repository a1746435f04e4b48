//! Handlebars rendering plus the flash-to-toast pipeline
//!
//! Every page render constructs one `NotificationManager`, feeds the
//! session's drained flash queue through discovery, and hands the resulting
//! widgets to the template as the toast region.

use crate::error::Result as ServerResult;
use crate::pages::PageError;

use axum::response::Html;
use handlebars::Handlebars;
use panel_notify::{
    FlashDocument, FlashElement, FlashMessage, NotificationManager, Severity,
};
use serde_json::{Value, json};

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Register every `.hbs` file under `dir` by file stem
    pub fn new(dir: &str) -> ServerResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_templates_directory(".hbs", dir)?;

        Ok(Self { handlebars })
    }

    pub fn render(&self, name: &str, data: &Value) -> Result<String, PageError> {
        self.handlebars
            .render(name, data)
            .map_err(|source| PageError::Render { source })
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

/// Render a page with its flash messages turned into toast widgets.
///
/// The flash queue is rendered as a conventional `flash-messages` container
/// (kept in the markup, hidden once processed) and discovery feeds it
/// through the notification manager, so duplicates inside one page load
/// collapse into a single widget.
pub fn render_page(
    templates: &TemplateEngine,
    template: &str,
    flash: Vec<FlashMessage>,
    mut data: Value,
) -> Result<Html<String>, PageError> {
    let manager = NotificationManager::new();
    let mut document = FlashDocument::new();

    if !flash.is_empty() {
        let children = flash
            .iter()
            .map(|message| {
                FlashElement::new(
                    &["flash-item", severity_class(message.severity)],
                    message.text.as_str(),
                )
            })
            .collect();
        document.push(FlashElement::container(&["flash-messages"], children));
    }

    manager.run_discovery(&mut document);

    if let Value::Object(map) = &mut data {
        map.insert("toasts".into(), json!(manager.active_widgets()));
        map.insert("flash_sources".into(), flash_sources(&document));
    }

    templates.render(template, &data).map(Html)
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "flash-success",
        Severity::Error => "flash-error",
        Severity::Warning => "flash-warning",
        Severity::Info => "flash-info",
    }
}

/// The flash container as the template renders it: processed items stay in
/// the markup but hidden, mirroring what discovery did to them.
fn flash_sources(document: &FlashDocument) -> Value {
    let containers: Vec<Value> = document
        .roots()
        .iter()
        .map(|root| {
            json!({
                "classes": root.classes.join(" "),
                "hidden": root.is_hidden(),
                "items": root
                    .children()
                    .iter()
                    .map(|item| {
                        json!({
                            "classes": item.classes.join(" "),
                            "text": item.text,
                            "hidden": item.is_hidden(),
                        })
                    })
                    .collect::<Vec<Value>>(),
            })
        })
        .collect();

    json!(containers)
}
