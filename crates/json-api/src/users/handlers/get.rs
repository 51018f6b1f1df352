//! Get User Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::users::records::{UserId, UserRecord};

use crate::{extensions::*, users::errors::into_status_error};

/// A user as returned by the API; the password digest is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            id: user.id.into_i64(),
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Get User Handler
///
/// Answers `null` for an unknown id.
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User, or null"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<UserResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let user = state
        .app
        .users
        .get_user(UserId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.map(UserResponse::from)))
}
