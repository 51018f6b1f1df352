use clap::Args;
use jiff::SignedDuration;
use storefront_app::{
    auth::{DEFAULT_TOKEN_TTL, HmacAuthService, TokenSecret},
    database::{self, Db, PoolSettings},
};

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        let pool = database::connect(&self.database_url, PoolSettings::default())
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(Db::new(pool))
    }
}

#[derive(Debug, Args)]
pub(crate) struct TokenSigningArgs {
    /// Base64 HMAC secret used to sign bearer tokens
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    token_secret: String,

    /// Lifetime of issued tokens, in seconds
    #[arg(long, env = "TOKEN_TTL_SECONDS", default_value_t = DEFAULT_TOKEN_TTL.as_secs())]
    token_ttl_seconds: i64,
}

impl TokenSigningArgs {
    pub(crate) fn auth_service(&self) -> Result<HmacAuthService, String> {
        if self.token_ttl_seconds <= 0 {
            return Err("token-ttl-seconds must be positive".to_string());
        }

        let secret = TokenSecret::from_base64(&self.token_secret)
            .map_err(|error| format!("invalid token secret: {error}"))?;

        Ok(HmacAuthService::new(
            secret,
            SignedDuration::from_secs(self.token_ttl_seconds),
        ))
    }
}
