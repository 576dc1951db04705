use thiserror::Error;

use crate::ordering::error::OrderingError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid ordering: {0}")]
    Ordering(#[from] OrderingError),
}
