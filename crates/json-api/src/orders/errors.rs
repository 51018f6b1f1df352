//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::OrderNotFound { .. }
        | OrdersServiceError::ActiveOrderExists { .. }
        | OrdersServiceError::OrderNotActive { .. }
        | OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData
        | OrdersServiceError::InvalidQuantity(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            StatusError::bad_request().brief("storage error")
        }
    }
}
