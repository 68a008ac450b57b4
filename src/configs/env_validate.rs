use crate::error::ConfigError;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// Identifiers handed to the email-delivery service on every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Values baked in when the wasm bundle was built win over the process
/// environment, which is only populated on native runs.
pub fn email_config() -> Result<EmailConfig, ConfigError> {
    resolve(|name| {
        let baked = match name {
            SERVICE_ID_VAR => option_env!("EMAILJS_SERVICE_ID"),
            TEMPLATE_ID_VAR => option_env!("EMAILJS_TEMPLATE_ID"),
            PUBLIC_KEY_VAR => option_env!("EMAILJS_PUBLIC_KEY"),
            _ => None,
        };
        baked.map(str::to_string).or_else(|| std::env::var(name).ok())
    })
}

pub fn resolve(lookup: impl Fn(&'static str) -> Option<String>) -> Result<EmailConfig, ConfigError> {
    let required = |name: &'static str| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                log::warn!("{} not set, contact form submissions will fail", name);
                ConfigError::Missing(name)
            })
    };

    let config = EmailConfig {
        service_id: required(SERVICE_ID_VAR)?,
        template_id: required(TEMPLATE_ID_VAR)?,
        public_key: required(PUBLIC_KEY_VAR)?,
    };

    log::info!("Using EmailJS public key (masked): {}", mask(&config.public_key));

    Ok(config)
}

pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    "*".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
}
