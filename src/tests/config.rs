use std::collections::HashMap;

use crate::configs::env_validate::{ mask, resolve, PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR };
use crate::configs::EmailConfig;
use crate::error::{ ConfigError, DeliveryError };
use crate::services::{ ContactMessage, EmailJsClient, EmailRequest, EmailSender };

fn env(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    pairs.iter().map(|(key, value)| (*key, value.to_string())).collect()
}

#[test]
fn test_resolve_reads_all_three_identifiers() {
    let vars = env(&[
        (SERVICE_ID_VAR, "service_abc"),
        (TEMPLATE_ID_VAR, " template_xyz "),
        (PUBLIC_KEY_VAR, "pk_1234567"),
    ]);

    let config = resolve(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(config, EmailConfig {
        service_id: "service_abc".to_string(),
        template_id: "template_xyz".to_string(),
        public_key: "pk_1234567".to_string(),
    });
}

#[test]
fn test_resolve_treats_blank_as_missing() {
    let vars = env(&[(SERVICE_ID_VAR, "service_abc"), (TEMPLATE_ID_VAR, "   ")]);

    assert_eq!(
        resolve(|name| vars.get(name).cloned()),
        Err(ConfigError::Missing(TEMPLATE_ID_VAR))
    );
}

#[test]
fn test_mask_keeps_last_four() {
    assert_eq!(mask("pk_1234567"), "******4567");
    assert_eq!(mask("abc"), "abc");
    assert_eq!(mask(""), "");
}

#[test]
fn test_request_body_shape() {
    let config = EmailConfig {
        service_id: "svc".to_string(),
        template_id: "tpl".to_string(),
        public_key: "key".to_string(),
    };
    let message = ContactMessage {
        user_name: "Ada".to_string(),
        reply_to: "ada@example.com".to_string(),
        message: "Hello".to_string(),
    };

    let body: serde_json::Value =
        serde_json::from_str(&EmailRequest::new(&config, &message).to_body().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({
        "service_id": "svc",
        "template_id": "tpl",
        "user_id": "key",
        "template_params": {
            "user_name": "Ada",
            "reply_to": "ada@example.com",
            "message": "Hello"
        }
    }));
}

#[test]
fn test_unconfigured_client_fails_without_network() {
    let client = EmailJsClient::new(Err(ConfigError::Missing(SERVICE_ID_VAR)));
    let message = ContactMessage {
        user_name: "Ada".to_string(),
        reply_to: String::new(),
        message: "Hello".to_string(),
    };

    let outcome = futures::executor::block_on(client.send(&message));
    assert_eq!(outcome, Err(DeliveryError::NotConfigured(ConfigError::Missing(SERVICE_ID_VAR))));
}
