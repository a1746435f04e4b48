mod discovery;

use crate::{FlashDocument, FlashElement};

/// The markup shape the view layer renders for server flash messages
pub(crate) fn flash_container(messages: &[&str]) -> FlashDocument {
    let children = messages
        .iter()
        .map(|text| FlashElement::new(&[], *text))
        .collect();

    let mut document = FlashDocument::new();
    document.push(FlashElement::container(&["flash-messages"], children));
    document
}
