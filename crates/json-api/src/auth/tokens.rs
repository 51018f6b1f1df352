//! Token responses.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use storefront_app::{
    auth::{AuthService, IssuedToken},
    domain::users::records::UserId,
};
use tracing::error;

/// Bearer token handed out on signup and login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    pub token: String,
    pub user_id: i64,

    /// RFC 3339 timestamp after which the token is rejected.
    pub expires_at: String,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        TokenResponse {
            token: issued.token,
            user_id: issued.user.into_i64(),
            expires_at: issued.expires_at.to_string(),
        }
    }
}

pub(crate) async fn issue(
    auth: &dyn AuthService,
    user: UserId,
) -> Result<TokenResponse, StatusError> {
    auth.issue_token(user)
        .await
        .map(Into::into)
        .map_err(|source| {
            error!(user_id = %user, "failed to issue token: {source}");

            StatusError::internal_server_error()
        })
}
