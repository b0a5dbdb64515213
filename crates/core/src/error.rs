/// Errors raised while building or rendering envelopes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A caller passed data the formatter cannot work with (zero page size,
    /// clashing field aliases, malformed option values, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload could not be converted to its structured JSON form.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for results carrying a [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
