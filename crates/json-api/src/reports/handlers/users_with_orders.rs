//! Users With Orders Report

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::dashboard::records::UserWithOrderRecord;

use crate::{extensions::*, reports::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserWithOrderResponse {
    pub username: String,
}

impl From<UserWithOrderRecord> for UserWithOrderResponse {
    fn from(row: UserWithOrderRecord) -> Self {
        UserWithOrderResponse {
            username: row.username,
        }
    }
}

/// Users With Orders Handler
///
/// One row per order, so a username repeats for every order its user owns.
#[endpoint(tags("reports"), summary = "Users With Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<UserWithOrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let rows = state
        .app
        .dashboard
        .users_with_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
