use crate::tests::flash_container;
use crate::{
    FlashDocument, FlashElement, NotificationManager, Severity, SharedDocument,
};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;

#[tokio::test(start_paused = true)]
async fn server_rendered_flash_becomes_one_success_widget() {
    let manager = NotificationManager::new();
    let mut document = flash_container(&["Aviso criado com sucesso"]);

    let produced = manager.run_discovery(&mut document);

    assert_that!(produced, eq(1));
    let views = manager.active_widgets();
    assert_that!(views.len(), eq(1));
    assert_that!(views[0].severity, eq(Severity::Success));
    assert_that!(views[0].duration_ms, eq(5000));

    // source element and its container are hidden
    let container = &document.roots()[0];
    assert!(container.is_hidden());
    assert!(container.children()[0].is_hidden());
    assert!(container.children()[0].is_processed());
}

#[tokio::test(start_paused = true)]
async fn repeated_discovery_over_unchanged_document_is_idempotent() {
    let manager = NotificationManager::new();
    let mut document = flash_container(&["Aviso criado com sucesso", "Erro ao excluir aviso"]);

    let first = manager.run_discovery(&mut document);
    let second = manager.run_discovery(&mut document);

    assert_that!(first, eq(2));
    assert_that!(second, eq(0));
    assert_that!(manager.active_widgets().len(), eq(2));
}

#[tokio::test(start_paused = true)]
async fn duplicate_source_elements_collapse_to_one_widget() {
    let manager = NotificationManager::new();
    let mut document = flash_container(&["Aviso criado com sucesso", "Aviso criado com sucesso"]);

    let produced = manager.run_discovery(&mut document);

    assert_that!(produced, eq(1));
    // the dropped duplicate stays unprocessed so a later pass can retry it
    assert!(!document.roots()[0].children()[1].is_processed());

    tokio::time::sleep(Duration::from_millis(3001)).await;
    let produced_later = manager.run_discovery(&mut document);
    assert_that!(produced_later, eq(1));
}

#[tokio::test(start_paused = true)]
async fn class_hints_outrank_text_keywords() {
    let manager = NotificationManager::new();
    let mut document = FlashDocument::new();
    // text says success, class says error
    document.push(FlashElement::new(
        &["flash-item", "flash-error"],
        "Registro criado com sucesso",
    ));

    manager.run_discovery(&mut document);

    let views = manager.active_widgets();
    assert_that!(views[0].severity, eq(Severity::Error));
    assert_that!(views[0].duration_ms, eq(6000));
}

#[tokio::test(start_paused = true)]
async fn generic_alert_elements_are_discovered_after_flash_markers() {
    let manager = NotificationManager::new();
    let mut document = FlashDocument::new();
    document.push(FlashElement::new(&["alert", "alert-danger"], "Falha no servidor"));
    document.push(FlashElement::new(&["flash-item"], "Aluno cadastrado"));

    manager.run_discovery(&mut document);

    let views = manager.active_widgets();
    assert_that!(views.len(), eq(2));
    // flash-item marker was processed first despite document order
    assert_that!(views[0].text.as_str(), eq("Aluno cadastrado"));
    assert_that!(views[1].text.as_str(), eq("Falha no servidor"));
}

#[tokio::test(start_paused = true)]
async fn blank_elements_are_skipped_without_side_effects() {
    let manager = NotificationManager::new();
    let mut document = flash_container(&["   "]);

    let produced = manager.run_discovery(&mut document);

    assert_that!(produced, eq(0));
    assert!(!document.roots()[0].children()[0].is_processed());
}

// =========================================================================
// Staged passes
// =========================================================================

#[tokio::test(start_paused = true)]
async fn delayed_passes_pick_up_late_arriving_elements() {
    let manager = NotificationManager::new();
    let document: SharedDocument = Arc::new(Mutex::new(FlashDocument::new()));

    let produced = manager.run_discovery_schedule(&document);
    assert_that!(produced, eq(0));

    // the page assembles a flash element after initial render
    document
        .lock()
        .unwrap()
        .push(FlashElement::new(&["flash-item"], "Mensagem respondida"));

    tokio::time::sleep(Duration::from_millis(251)).await;
    assert_that!(manager.active_widgets().len(), eq(1));

    // the second delayed pass finds nothing new
    tokio::time::sleep(Duration::from_millis(800)).await;
    assert_that!(manager.active_widgets().len(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn load_complete_pass_runs_exactly_once() {
    let manager = NotificationManager::new();
    let document: SharedDocument = Arc::new(Mutex::new(FlashDocument::new()));
    document
        .lock()
        .unwrap()
        .push(FlashElement::new(&["flash-item"], "Documento removido"));

    let first = manager.on_load_complete(&document);
    let second = manager.on_load_complete(&document);

    assert_that!(first, eq(1));
    assert_that!(second, eq(0));
}
