//! App Context

use std::{fmt, sync::Arc};

use jiff::SignedDuration;
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, HmacAuthService, Passwords, TokenSecret},
    database::{self, Db, PoolSettings},
    domain::{
        dashboard::{DashboardService, PgDashboardService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Everything needed to build the services.
#[derive(Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub pool: PoolSettings,
    pub token_secret: TokenSecret,
    pub token_ttl: SignedDuration,
    pub password_pepper: String,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("pool", &self.pool)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Connect to the database and build every service on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn connect(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url, settings.pool)
            .await
            .map_err(AppInitError::Database)?;

        info!(
            max_connections = settings.pool.max_connections,
            "connected to database"
        );

        Ok(Self::from_db(
            Db::new(pool),
            Passwords::new(settings.password_pepper),
            HmacAuthService::new(settings.token_secret, settings.token_ttl),
        ))
    }

    /// Build the services on an existing pool.
    #[must_use]
    pub fn from_db(db: Db, passwords: Passwords, auth: HmacAuthService) -> Self {
        Self {
            users: Arc::new(PgUsersService::new(db.clone(), passwords)),
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            dashboard: Arc::new(PgDashboardService::new(db)),
            auth: Arc::new(auth),
        }
    }
}
