//! Auth service errors.

use thiserror::Error;

use crate::auth::ApiTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    Expired,

    #[error("token processing error")]
    Token(#[source] ApiTokenError),

    #[error("token expiry is out of range")]
    Timestamp(#[source] jiff::Error),
}

impl From<ApiTokenError> for AuthServiceError {
    fn from(error: ApiTokenError) -> Self {
        Self::Token(error)
    }
}

impl From<jiff::Error> for AuthServiceError {
    fn from(error: jiff::Error) -> Self {
        Self::Timestamp(error)
    }
}
