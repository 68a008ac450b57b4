use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{ select, Either };
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{ Deserialize, Serialize };

use crate::configs::{ email_config, EmailConfig };
use crate::error::{ ConfigError, DeliveryError };

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DELIVERY_TIMEOUT_MS: u32 = 15_000;

/// Template parameters; names match the EmailJS template fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub user_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactMessage,
}

impl EmailRequest {
    pub fn new(config: &EmailConfig, message: &ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: message.clone(),
        }
    }

    pub fn to_body(&self) -> Result<String, DeliveryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The external email-delivery collaborator. No retries happen behind this
/// interface.
#[allow(async_fn_in_trait)]
pub trait EmailSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

pub struct EmailJsClient {
    config: Result<EmailConfig, ConfigError>,
    timeout_ms: u32,
}

impl EmailJsClient {
    pub fn new(config: Result<EmailConfig, ConfigError>) -> Self {
        Self { config, timeout_ms: DELIVERY_TIMEOUT_MS }
    }

    pub fn from_env() -> Self {
        Self::new(email_config())
    }

    async fn post(&self, body: String) -> Result<(), DeliveryError> {
        let response = Request::post(EMAILJS_SEND_URL)
            .header("Content-Type", "application/json")
            .body(body)?
            .send().await?;

        if response.ok() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let config = self.config.as_ref().map_err(|err| DeliveryError::from(err.clone()))?;
        let body = EmailRequest::new(config, message).to_body()?;

        let request = Box::pin(self.post(body));
        let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(request, deadline).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(DeliveryError::Timeout(self.timeout_ms)),
        }
    }
}

/// One client per mounted form; the config is read and logged once.
pub fn use_email_client() -> Rc<EmailJsClient> {
    use_hook(|| Rc::new(EmailJsClient::from_env()))
}
