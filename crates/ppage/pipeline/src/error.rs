//! Pipeline error taxonomy.

use thiserror::Error;

/// Errors produced by the normalization pipeline.
///
/// Every variant is terminal for the pass that raised it: callers get either
/// a fully normalized profile or one of these, never a partial display.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("rating value {value} is outside the known rating domain")]
    UnknownRating { value: i64 },

    #[error("pronoun `{pronoun}` collides with another entry after expansion")]
    DuplicatePronoun { pronoun: String },

    #[error("custom flag label `{label}` is used by more than one flag")]
    AmbiguousFlagLabel { label: String },

    #[error("profile has no language variants")]
    ProfileNotFound,

    #[error("cannot resolve a reference for `{label}`")]
    UnresolvableReference { label: String },
}

/// Pipeline result type.
pub type PipelineResult<T> = Result<T, PipelineError>;
