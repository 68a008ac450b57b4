use thiserror::Error;

/// Reasons a decorative animation could not start. Any of these sends the
/// owning section to its static fallback render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("Invalid palette color: {0}")]
    InvalidColor(String),
    #[error("Animation needs at least one keyframe")]
    EmptyKeyframes,
    #[error("Animation duration must be positive, got {0}ms")]
    InvalidDuration(f64),
    #[error("Frame scheduler unavailable: {0}")]
    Scheduler(String),
}
