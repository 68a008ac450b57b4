use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing email delivery setting: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Email delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Delivery timed out after {0}ms")]
    Timeout(u32),
    #[error("Payload Error: {0}")]
    Payload(String),
}

impl From<gloo_net::Error> for DeliveryError {
    fn from(error: gloo_net::Error) -> Self {
        DeliveryError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(error: serde_json::Error) -> Self {
        DeliveryError::Payload(error.to_string())
    }
}
