use std::cell::RefCell;

use futures::executor::block_on;

use crate::error::DeliveryError;
use crate::tests::common::mocks::ScriptedSender;
use crate::utils::contact_form::*;

fn form_with(name: &str, reply_to: &str, message: &str) -> RefCell<ContactForm> {
    RefCell::new(ContactForm {
        fields: ContactFields {
            name: name.to_string(),
            reply_to: reply_to.to_string(),
            message: message.to_string(),
        },
        status: SubmissionStatus::default(),
    })
}

#[test]
fn test_fresh_form_is_idle() {
    let form = ContactForm::default();
    assert_eq!(form.phase(), Phase::Idle);
    assert_eq!(form.status.ok, None);
    assert!(form.status.message.is_empty());
}

#[test]
fn test_missing_name_fails_locally() {
    let form = form_with("", "ada@example.com", "Hello there");
    let sender = ScriptedSender::succeeding();

    assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Failed);
    assert_eq!(sender.calls(), 0);

    let form = form.borrow();
    assert_eq!(form.status.message, VALIDATION_MESSAGE);
    assert_eq!(form.fields.message, "Hello there");
}

#[test]
fn test_whitespace_only_fields_count_as_missing() {
    for (name, message) in [("   ", "Hi"), ("Ada", "\n\t "), (" ", " ")] {
        let form = form_with(name, "ada@example.com", message);
        let sender = ScriptedSender::succeeding();

        assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Failed);
        assert_eq!(sender.calls(), 0);
    }
}

#[test]
fn test_success_clears_fields() {
    let form = form_with("  Ada ", "ada@example.com", " Hello there ");
    let sender = ScriptedSender::succeeding();

    assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Succeeded);
    assert_eq!(sender.calls(), 1);

    let sent = sender.last_message().unwrap();
    assert_eq!(sent.user_name, "Ada");
    assert_eq!(sent.message, " Hello there ");
    assert_eq!(sent.reply_to, "ada@example.com");

    let form = form.borrow();
    assert_eq!(form.status, SubmissionStatus {
        sending: false,
        ok: Some(true),
        message: SUCCESS_MESSAGE.to_string(),
    });
    assert_eq!(form.fields, ContactFields::default());
}

#[test]
fn test_failure_keeps_fields_for_retry() {
    crate::tests::common::setup();
    let form = form_with("Ada", "ada@example.com", "Hello");
    let sender = ScriptedSender::failing(DeliveryError::Rejected { status: 400, body: "bad".to_string() });

    assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Failed);
    assert_eq!(sender.calls(), 1);

    let snapshot = form.borrow().clone();
    assert_eq!(snapshot.status.message, FAILURE_MESSAGE);
    assert_eq!(snapshot.fields.name, "Ada");
    assert_eq!(snapshot.fields.reply_to, "ada@example.com");
    assert_eq!(snapshot.fields.message, "Hello");

    // Outcomes are not sticky: the next attempt goes out again.
    let retry = ScriptedSender::succeeding();
    assert_eq!(block_on(submit_contact(&form, &retry)), Phase::Succeeded);
    assert_eq!(retry.calls(), 1);
}

#[test]
fn test_message_layout_is_sent_unchanged() {
    let body = "  Hi,\n\n    indented line\n\nThanks\n\n";
    let form = form_with("Ada", "ada@example.com", body);
    let sender = ScriptedSender::succeeding();

    assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Succeeded);
    assert_eq!(sender.last_message().unwrap().message, body);
}

#[test]
fn test_timeout_is_a_delivery_failure() {
    let form = form_with("Ada", "ada@example.com", "Hello");
    let sender = ScriptedSender::failing(DeliveryError::Timeout(15_000));

    assert_eq!(block_on(submit_contact(&form, &sender)), Phase::Failed);
    assert_eq!(form.borrow().status.message, FAILURE_MESSAGE);
}

#[test]
fn test_double_submit_sends_once() {
    let form = form_with("Ada", "ada@example.com", "Hello");
    let (sender, release) = ScriptedSender::gated();

    let (first, second, ()) = block_on(async {
        futures::join!(
            submit_contact(&form, &sender),
            submit_contact(&form, &sender),
            async {
                let _ = release.send(Ok(()));
            }
        )
    });

    assert_eq!(sender.calls(), 1);
    assert_eq!(second, Phase::Sending);
    assert_eq!(first, Phase::Succeeded);
    assert_eq!(form.borrow().phase(), Phase::Succeeded);
}

#[test]
fn test_begin_submit_while_sending_is_rejected() {
    let mut form = form_with("Ada", "ada@example.com", "Hello").into_inner();

    assert!(form.begin_submit().is_ok());
    assert_eq!(form.phase(), Phase::Sending);
    assert_eq!(form.begin_submit(), Err(Rejection::InFlight));
    assert_eq!(form.phase(), Phase::Sending);

    assert_eq!(form.complete(Err(DeliveryError::Network("offline".to_string()))), Phase::Failed);
    assert!(form.begin_submit().is_ok());
}
