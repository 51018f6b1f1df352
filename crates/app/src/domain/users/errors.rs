//! Users service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{
    auth::PasswordError,
    database::{Violation, violation},
};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user {username} already exists")]
    DuplicateUser { username: String },

    #[error("user is still referenced by orders")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("password processing failed")]
    Password(#[from] PasswordError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        match violation(&error) {
            Some(Violation::ForeignKey) => Self::InvalidReference,
            Some(Violation::NotNull) => Self::MissingRequiredData,
            Some(Violation::Check) => Self::InvalidData,
            None => Self::Sql(error),
        }
    }
}
