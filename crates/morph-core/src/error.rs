use thiserror::Error;

/// Errors surfaced by the morph core.
///
/// The core performs no I/O, so every failure is a synchronous rejection of
/// invalid input. State is never mutated on the error path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorphError {
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("particle capacity must be non-zero")]
    ZeroCapacity,
    #[error("smoothing factor {0} is outside (0, 1]")]
    InvalidSmoothing(f32),
    #[error("morph duration {0}s must be finite and non-negative")]
    InvalidDuration(f64),
}
