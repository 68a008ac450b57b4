pub mod components;
pub mod configs;
pub mod content;
pub mod error;
mod routes;
pub mod services;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::email_config;
pub use crate::error::{ AnimationError, ConfigError, DeliveryError, NavigationError };
