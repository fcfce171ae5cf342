use thiserror::Error;

/// Top-level error type for the umbra geometry kernel.
#[derive(Debug, Error)]
pub enum UmbraError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Clipping(#[from] ClippingError),
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors from the polygon clipping backend.
#[derive(Debug, Error)]
pub enum ClippingError {
    #[error("degenerate ring: {0}")]
    DegenerateRing(String),

    #[error("clipping backend panicked")]
    BackendPanic,

    #[error("clipping produced no output")]
    EmptyResult,
}

/// Convenience type alias for results using [`UmbraError`].
pub type Result<T> = std::result::Result<T, UmbraError>;
