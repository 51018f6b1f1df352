//! Auth middleware.

use salvo::{http::header::AUTHORIZATION, prelude::*};
use storefront_app::auth::AuthServiceError;
use tracing::{Span, debug, error};

use crate::{auth::ACCESS_DENIED, extensions::*};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief(ACCESS_DENIED));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let user = match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => user,
        Err(AuthServiceError::InvalidToken | AuthServiceError::Expired) => {
            debug!("rejected bearer token");

            res.render(StatusError::unauthorized().brief(ACCESS_DENIED));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Token(source)) => {
            error!("failed to process bearer token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Timestamp(source)) => {
            error!("failed to check bearer token expiry: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    Span::current().record("user_id", user.into_i64());

    depot.insert_user_id(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use storefront_app::{auth::MockAuthService, domain::users::records::UserId};
    use testresult::TestResult;

    use crate::{catcher, test_helpers::state_with_auth};

    use super::*;

    #[salvo::handler]
    async fn echo_user(depot: &mut Depot, res: &mut Response) {
        let user = depot
            .user_id_or_401()
            .ok()
            .map_or_else(|| "missing".to_string(), |user| user.to_string());

        res.render(user);
    }

    fn make_service(auth: MockAuthService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(handler)
            .push(Router::new().get(echo_user));

        Service::new(router).catcher(catcher::plain_text())
    }

    async fn assert_denied(res: &mut salvo::Response) -> TestResult {
        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        assert_eq!(res.take_string().await?, ACCESS_DENIED);

        Ok(())
    }

    #[tokio::test]
    async fn missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        assert_denied(&mut res).await
    }

    #[tokio::test]
    async fn non_bearer_scheme_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(auth))
            .await;

        assert_denied(&mut res).await
    }

    #[tokio::test]
    async fn bearer_without_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer ", true)
            .send(&make_service(auth))
            .await;

        assert_denied(&mut res).await
    }

    #[tokio::test]
    async fn invalid_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::InvalidToken));
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_denied(&mut res).await
    }

    #[tokio::test]
    async fn expired_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::Expired));
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_denied(&mut res).await
    }

    #[tokio::test]
    async fn valid_token_injects_user_id() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok(UserId::from_i64(7)));
        auth.expect_issue_token().never();

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "7");

        Ok(())
    }
}
