use catalog_request::{error::RequestError, ordering::error::OrderingError};
use thiserror::Error;

/// Application error types.
///
/// Represents all possible errors that can occur in the catalog service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected internal errors that occur during service operation.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Request processing error.
    ///
    /// Represents invalid query parameters such as an unsupported ordering.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// I/O error, mostly from binding or accepting sockets.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application result type.
///
/// Type alias for Result with `AppError` as the error type.
/// Used throughout the application for consistent error handling.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short name of the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Internal(_) => "internal",
            AppError::Request(_) => "request",
            AppError::Io(_) => "io",
        }
    }
}

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError);

macro_rules! impl_request_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                RequestError::from(err).into()
            }
        }
        )*
    };
}
impl_request_errors!(OrderingError);
