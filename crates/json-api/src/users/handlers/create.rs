//! Create User Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::users::data::NewUser;

use crate::{
    auth::tokens::{self, TokenResponse},
    extensions::*,
    users::errors::into_status_error,
};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
        }
    }
}

/// Create User Handler
///
/// Signs the new user up and returns a bearer token for them.
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let user = state
        .app
        .users
        .create_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let token = tokens::issue(state.app.auth.as_ref(), user.id).await?;

    info!(user_id = %user.id, "signed up user");

    res.add_header(LOCATION, format!("/users/{}", user.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(token))
}
