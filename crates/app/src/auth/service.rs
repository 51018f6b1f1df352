//! Auth service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{
        ApiTokenVersion, AuthServiceError, TokenSecret, build_signing_input, format_api_token,
        parse_api_token, sign, verify_signature,
    },
    domain::users::records::UserId,
};

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(24);

/// A freshly signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub user: UserId,
    pub expires_at: Timestamp,
}

/// Signs and verifies stateless HMAC bearer tokens.
#[derive(Debug, Clone)]
pub struct HmacAuthService {
    secret: TokenSecret,
    ttl: SignedDuration,
}

impl HmacAuthService {
    #[must_use]
    pub fn new(secret: TokenSecret, ttl: SignedDuration) -> Self {
        Self { secret, ttl }
    }

    fn issue_at(&self, user: UserId, now: Timestamp) -> Result<IssuedToken, AuthServiceError> {
        let version = ApiTokenVersion::V1;
        let expires_at = now.checked_add(self.ttl)?;
        let signature = sign(&self.secret, &build_signing_input(user, version, expires_at))?;

        Ok(IssuedToken {
            token: format_api_token(user, version, expires_at, &signature),
            user,
            expires_at,
        })
    }

    fn authenticate_at(
        &self,
        bearer_token: &str,
        now: Timestamp,
    ) -> Result<UserId, AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|error| {
            debug!("rejected malformed bearer token: {error}");

            AuthServiceError::InvalidToken
        })?;

        let input = build_signing_input(parsed.user, parsed.version, parsed.expires_at);

        if !verify_signature(&self.secret, &input, &parsed.signature)? {
            return Err(AuthServiceError::InvalidToken);
        }

        if parsed.expires_at <= now {
            return Err(AuthServiceError::Expired);
        }

        Ok(parsed.user)
    }
}

#[async_trait]
impl AuthService for HmacAuthService {
    async fn issue_token(&self, user: UserId) -> Result<IssuedToken, AuthServiceError> {
        self.issue_at(user, Timestamp::now())
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError> {
        self.authenticate_at(bearer_token, Timestamp::now())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign a token identifying `user`.
    async fn issue_token(&self, user: UserId) -> Result<IssuedToken, AuthServiceError>;

    /// Verify a bearer token and return the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError>;
}
