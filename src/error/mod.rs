mod animation;
mod delivery;

pub use animation::AnimationError;
pub use delivery::{ ConfigError, DeliveryError };

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown section anchor: {0}")]
    UnknownSection(String),
}
