//! User Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::DuplicateUser { .. }
        | UsersServiceError::InvalidReference
        | UsersServiceError::MissingRequiredData
        | UsersServiceError::InvalidData => StatusError::bad_request().brief(error.to_string()),
        UsersServiceError::Password(source) => {
            error!("failed to process password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("user storage failed: {source}");

            StatusError::bad_request().brief("storage error")
        }
    }
}
