//! Error types module
//!
//! Every failure of a submission is unified under the `AppError` enum. The
//! policy is uniform across the client: the response status is checked before
//! the body is read, every failure is reported through `tracing`, and no
//! failure is fatal to the process. Each failed submission is independent and
//! the caller may simply resubmit.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submission was rejected before any network I/O.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request could not be completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request completed with a non-success status.
    #[error("Processing request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Success status, but the body does not match the expected result shape.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}
