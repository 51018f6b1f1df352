//! Authenticate User Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    auth::tokens::{self, TokenResponse},
    extensions::*,
    users::errors::into_status_error,
};

/// Brief of the 401 returned for unknown usernames and wrong passwords alike.
pub(crate) const WRONG_CREDENTIALS: &str = "Wrong username-password";

/// Authenticate Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthenticateRequest {
    pub username: String,
    pub password: String,
}

/// Authenticate User Handler
#[endpoint(
    tags("users"),
    summary = "Authenticate User",
    responses(
        (status_code = StatusCode::OK, description = "Credentials accepted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Wrong username or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AuthenticateRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let Some(user) = state
        .app
        .users
        .authenticate(&request.username, &request.password)
        .await
        .map_err(into_status_error)?
    else {
        debug!("rejected login attempt");

        return Err(StatusError::unauthorized().brief(WRONG_CREDENTIALS));
    };

    let token = tokens::issue(state.app.auth.as_ref(), user.id).await?;

    info!(user_id = %user.id, "user logged in");

    Ok(Json(token))
}
