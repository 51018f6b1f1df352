//! Orders service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

use crate::{
    database::{Violation, violation},
    domain::{orders::records::OrderId, users::records::UserId},
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("user {user} already has an active order")]
    ActiveOrderExists { user: UserId },

    #[error("order {order} is {status}, products can only change on an active order")]
    OrderNotActive { order: OrderId, status: String },

    #[error("order {order} does not exist")]
    OrderNotFound { order: OrderId },

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid quantity value")]
    InvalidQuantity(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match violation(&error) {
            Some(Violation::ForeignKey) => Self::InvalidReference,
            Some(Violation::NotNull) => Self::MissingRequiredData,
            Some(Violation::Check) => Self::InvalidData,
            None => Self::Sql(error),
        }
    }
}
