use thiserror::Error;

/// Failures raised by a document store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store snapshot is corrupt: {0}")]
    Corrupt(String),

    /// A backend that could not be reached. The file-backed store never raises it;
    /// it is the failure a networked backend reports.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a rejected service operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required field was blank or a business rule failed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The store failed; passed through untouched.
    #[error(transparent)]
    Unexpected(#[from] StoreError),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type StoreResult<T> = Result<T, StoreError>;
