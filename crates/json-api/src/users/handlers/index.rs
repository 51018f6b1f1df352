//! User Index Handler

use salvo::prelude::*;

use crate::{extensions::*, users::errors::into_status_error, users::get::UserResponse};

/// User Index Handler
///
/// Returns every user.
#[endpoint(tags("users"), summary = "List Users", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
