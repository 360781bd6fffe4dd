//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, data-integrity failures. None of these
/// are transient; callers never retry them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play carries a genre label outside the closed set.
    #[error("unknown type: {label}")]
    UnknownGenre { label: String },

    /// A performance references a play key absent from the lookup.
    #[error("unknown play: {play_id}")]
    UnknownPlay { play_id: String },

    /// A charge or total does not fit in the money representation.
    #[error("amount overflow: {0}")]
    AmountOverflow(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Pricing configuration is unusable.
    #[error("invalid pricing configuration: {0}")]
    Config(String),
}

impl DomainError {
    pub fn unknown_genre(label: impl Into<String>) -> Self {
        Self::UnknownGenre {
            label: label.into(),
        }
    }

    pub fn unknown_play(play_id: impl Into<String>) -> Self {
        Self::UnknownPlay {
            play_id: play_id.into(),
        }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::AmountOverflow(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
