use std::time::{Duration, Instant};

use fatura_app::{SubmissionController, UploadSettings};
use fatura_core::{InvoiceFile, SubmissionView};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_file() -> InvoiceFile {
    InvoiceFile {
        file_name: "invoice.png".to_string(),
        media_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

fn settings_for(server: &MockServer) -> UploadSettings {
    UploadSettings {
        endpoint: format!("{}/api/process-invoice/", server.uri()),
        ..UploadSettings::default()
    }
}

/// Pumps engine events until the predicate holds or a deadline passes.
fn pump_until(
    controller: &mut SubmissionController,
    pred: impl Fn(&SubmissionView) -> bool,
) -> SubmissionView {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.pump();
        let view = controller.view();
        if pred(&view) {
            return view;
        }
        assert!(
            Instant::now() < deadline,
            "timed out waiting for state change; last view: {view:?}"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_happy_path_publishes_views_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-invoice/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "nr_kartele": "12345",
                "pershkrimi": "Shërbim X",
                "njesia": "copë",
                "sasia": 5,
                "cmimi": 100.00,
                "vlera_pa_tvsh": 500.00,
                "tvsh": "18%",
                "vlera_me_tvsh": 590.00
            }],
            "raw_text": "INVOICE #12345"
        })))
        .mount(&server)
        .await;

    let mut controller = SubmissionController::new(settings_for(&server));
    let updates = controller.updates().expect("first take");
    assert!(controller.updates().is_none());

    controller.submit(Some(sample_file()));
    assert!(controller.view().busy);

    let view = pump_until(&mut controller, |view| view.invoice.is_some());
    let invoice = view.invoice.expect("invoice view");
    assert_eq!(invoice.rows.len(), 1);
    assert_eq!(invoice.rows[0].cells[0], "12345");
    assert_eq!(invoice.raw_text.as_deref(), Some("INVOICE #12345"));

    // Observers saw the busy view first, then the result, in that order.
    let first = updates.try_recv().expect("busy view");
    assert!(first.busy);
    let second = updates.try_recv().expect("result view");
    assert!(second.invoice.is_some());
    assert!(updates.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn rejection_surfaces_message_and_reset_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-invoice/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "detail": "OCR engine unavailable" })),
        )
        .mount(&server)
        .await;

    let mut controller = SubmissionController::new(settings_for(&server));
    controller.submit(Some(sample_file()));

    let view = pump_until(&mut controller, |view| view.error.is_some());
    assert_eq!(view.error.as_deref(), Some("OCR engine unavailable"));
    assert_eq!(view.invoice, None);

    // Failed is always escapable.
    controller.reset();
    assert_eq!(controller.view(), SubmissionView::default());

    // And the slot is free for a fresh attempt.
    controller.submit(Some(sample_file()));
    assert!(controller.view().busy);
}

#[tokio::test(flavor = "multi_thread")]
async fn second_submit_while_busy_issues_no_second_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-invoice/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(json!({ "items": [], "raw_text": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = SubmissionController::new(settings_for(&server));
    controller.submit(Some(sample_file()));
    controller.submit(Some(sample_file()));

    let view = pump_until(&mut controller, |view| view.invoice.is_some());
    assert!(view.invoice.is_some());
    // MockServer verifies the expected request count on drop.
}

#[tokio::test(flavor = "multi_thread")]
async fn dismissed_picker_changes_nothing() {
    let server = MockServer::start().await;
    let mut controller = SubmissionController::new(settings_for(&server));
    let updates = controller.updates().expect("take updates");

    controller.submit(None);

    assert_eq!(controller.view(), SubmissionView::default());
    assert!(updates.try_recv().is_err());
}
