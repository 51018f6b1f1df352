//! Auth Config

use clap::Args;
use jiff::SignedDuration;
use storefront_app::auth::DEFAULT_TOKEN_TTL;

/// Token signing and password hashing settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Base64 HMAC secret used to sign bearer tokens (at least 32 bytes)
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// Lifetime of issued bearer tokens, in seconds
    #[arg(
        long,
        env = "TOKEN_TTL_SECONDS",
        default_value_t = DEFAULT_TOKEN_TTL.as_secs(),
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub token_ttl_seconds: i64,

    /// Server-wide secret appended to passwords before hashing
    #[arg(long, env = "PASSWORD_PEPPER", hide_env_values = true)]
    pub password_pepper: String,
}

impl AuthConfig {
    #[must_use]
    pub fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(self.token_ttl_seconds)
    }
}
