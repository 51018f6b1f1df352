//! Delete User Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use storefront_app::domain::users::records::UserId;

use crate::{
    extensions::*,
    users::{errors::into_status_error, get::UserResponse},
};

/// Delete User Handler
///
/// Returns the removed user, `null` for an unknown id. Users that still own
/// orders are kept.
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Removed user, or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "User still has orders"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<UserResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let user = UserId::from_i64(id.into_inner());

    let deleted = state
        .app
        .users
        .delete_user(user)
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, user_id = %user, found = deleted.is_some(), "deleted user");

    Ok(Json(deleted.map(UserResponse::from)))
}
