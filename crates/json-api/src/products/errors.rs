//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData
        | ProductsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::bad_request().brief("storage error")
        }
    }
}
