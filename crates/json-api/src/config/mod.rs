//! Server configuration module

use clap::Parser;
use storefront_app::{
    auth::{ApiTokenError, TokenSecret},
    context::AppSettings,
};
use thiserror::Error;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::ObservabilityConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Errors in values that parse but cannot be used.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("TOKEN_SECRET is unusable: {0}")]
    TokenSecret(#[source] ApiTokenError),

    #[error("PASSWORD_PEPPER must not be empty")]
    EmptyPepper,
}

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging and request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Token and password settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for building the application services.
    pub(crate) fn app_settings(&self) -> Result<AppSettings, ConfigError> {
        if self.auth.password_pepper.is_empty() {
            return Err(ConfigError::EmptyPepper);
        }

        let token_secret =
            TokenSecret::from_base64(&self.auth.token_secret).map_err(ConfigError::TokenSecret)?;

        Ok(AppSettings {
            database_url: self.database.database_url.clone(),
            pool: self.database.pool_settings(),
            token_secret,
            token_ttl: self.auth.token_ttl(),
            password_pepper: self.auth.password_pepper.clone(),
        })
    }
}
