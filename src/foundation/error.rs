/// Convenience result type used across reelsync.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used at the engine boundaries.
///
/// Playback control never produces these; they surface only while accepting timeline data,
/// selecting audio files, or parsing input.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided timeline or audio data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors from the audio resource lifecycle.
    #[error("audio error: {0}")]
    Audio(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Audio`] value.
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
