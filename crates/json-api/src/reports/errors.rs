//! Report Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::dashboard::DashboardServiceError;

pub(crate) fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::Sql(source) => {
            error!("report query failed: {source}");

            StatusError::bad_request().brief("storage error")
        }
    }
}
