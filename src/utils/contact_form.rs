use dioxus::prelude::*;

use crate::error::DeliveryError;
use crate::services::{ ContactMessage, EmailSender };

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! 🎉";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const VALIDATION_MESSAGE: &str = "Please fill in your name and message.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub sending: bool,
    /// `None` until a submission has an outcome.
    pub ok: Option<bool>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn phase(&self) -> Phase {
        match (self.sending, self.ok) {
            (true, _) => Phase::Sending,
            (false, None) => Phase::Idle,
            (false, Some(true)) => Phase::Succeeded,
            (false, Some(false)) => Phase::Failed,
        }
    }

    fn sending() -> Self {
        Self { sending: true, ok: None, message: String::new() }
    }

    fn finished(ok: bool, message: &str) -> Self {
        Self { sending: false, ok: Some(ok), message: message.to_string() }
    }
}

/// Why a submit attempt did not reach the delivery service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    InFlight,
    MissingFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn phase(&self) -> Phase {
        self.status.phase()
    }

    /// Moves to `Sending` and hands back the message to deliver. Missing
    /// fields fail locally; a submission already in flight is ignored.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, Rejection> {
        if self.status.sending {
            return Err(Rejection::InFlight);
        }

        let name = self.fields.name.trim();
        if name.is_empty() || self.fields.message.trim().is_empty() {
            self.status = SubmissionStatus::finished(false, VALIDATION_MESSAGE);
            return Err(Rejection::MissingFields);
        }

        // The message body goes out exactly as typed.
        let outgoing = ContactMessage {
            user_name: name.to_string(),
            reply_to: self.fields.reply_to.trim().to_string(),
            message: self.fields.message.clone(),
        };
        self.status = SubmissionStatus::sending();
        Ok(outgoing)
    }

    /// Fields are kept on failure so the visitor can resubmit.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) -> Phase {
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::finished(true, SUCCESS_MESSAGE);
            }
            Err(err) => {
                log::error!("EmailJS Error: {}", err);
                self.status = SubmissionStatus::finished(false, FAILURE_MESSAGE);
            }
        }
        self.phase()
    }
}

/// Shared, mutable home of a `ContactForm`.
pub trait FormCell {
    fn update<R>(&self, apply: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for Signal<ContactForm> {
    fn update<R>(&self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        let mut signal = *self;
        let mut form = signal.write();
        apply(&mut form)
    }
}

impl FormCell for std::cell::RefCell<ContactForm> {
    fn update<R>(&self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        apply(&mut self.borrow_mut())
    }
}

/// Runs one submit attempt end to end and returns the resulting phase. The
/// form is never borrowed across the await.
pub async fn submit_contact<F, S>(form: &F, sender: &S) -> Phase
    where F: FormCell, S: EmailSender
{
    let outgoing = match form.update(ContactForm::begin_submit) {
        Ok(outgoing) => outgoing,
        Err(_) => {
            return form.update(|form| form.phase());
        }
    };

    let outcome = sender.send(&outgoing).await;
    form.update(|form| form.complete(outcome))
}
