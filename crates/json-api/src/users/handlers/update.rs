//! Update User Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::users::{data::UserUpdate, records::UserId};

use crate::{
    extensions::*,
    users::{errors::into_status_error, get::UserResponse},
};

/// Update User Request
///
/// Every field is required; the password is hashed again.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
        }
    }
}

/// Update User Handler
#[endpoint(
    tags("users"),
    summary = "Update User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated user, or null for an unknown id"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<Option<UserResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let user = UserId::from_i64(id.into_inner());

    let updated = state
        .app
        .users
        .update_user(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, user_id = %user, found = updated.is_some(), "updated user");

    Ok(Json(updated.map(UserResponse::from)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use storefront_app::domain::users::MockUsersService;
    use testresult::TestResult;

    use crate::test_helpers::users_service;

    use super::{super::tests::make_user, *};

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").put(handler))
    }

    fn request_body() -> serde_json::Value {
        json!({
            "username": "countess",
            "firstName": "Augusta",
            "lastName": "King",
            "password": "analytical",
        })
    }

    #[tokio::test]
    async fn test_update_user_returns_updated_user() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .withf(|user, update| {
                *user == UserId::from_i64(5)
                    && update.username == "countess"
                    && update.first_name == "Augusta"
                    && update.last_name == "King"
                    && update.password == "analytical"
            })
            .return_once(|_, _| Ok(Some(make_user(5, "countess"))));

        users.expect_list_users().never();
        users.expect_get_user().never();
        users.expect_create_user().never();
        users.expect_authenticate().never();
        users.expect_delete_user().never();

        let mut res = TestClient::put("http://example.com/users/5")
            .json(&request_body())
            .send(&make_service(users))
            .await;

        let body: UserResponse = res
            .take_json::<Option<UserResponse>>()
            .await?
            .ok_or("expected the updated user")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);
        assert_eq!(body.username, "countess");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_null() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .return_once(|_, _| Ok(None));

        users.expect_list_users().never();
        users.expect_get_user().never();
        users.expect_create_user().never();
        users.expect_authenticate().never();
        users.expect_delete_user().never();

        let mut res = TestClient::put("http://example.com/users/404")
            .json(&request_body())
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "null");

        Ok(())
    }
}
