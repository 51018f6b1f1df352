//! Dashboard service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::dashboard::{
        errors::DashboardServiceError,
        records::{
            ExpensiveProductRecord, PopularProductRecord, ProductInOrderRecord,
            UserWithOrderRecord,
        },
        repository::PgDashboardRepository,
    },
};

/// Rows returned by the "top N" reports.
pub const TOP_PRODUCTS_LIMIT: i64 = 5;

#[derive(Debug, Clone)]
pub struct PgDashboardService {
    db: Db,
    repository: PgDashboardRepository,
}

impl PgDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDashboardRepository::new(),
        }
    }
}

#[async_trait]
impl DashboardService for PgDashboardService {
    async fn products_in_orders(&self) -> Result<Vec<ProductInOrderRecord>, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.products_in_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn users_with_orders(&self) -> Result<Vec<UserWithOrderRecord>, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.users_with_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn five_most_expensive(
        &self,
    ) -> Result<Vec<ExpensiveProductRecord>, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self
            .repository
            .most_expensive_products(&mut tx, TOP_PRODUCTS_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn five_most_popular(&self) -> Result<Vec<PopularProductRecord>, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self
            .repository
            .most_popular_products(&mut tx, TOP_PRODUCTS_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(rows)
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Every product line of every order, with the product's name and price.
    async fn products_in_orders(&self) -> Result<Vec<ProductInOrderRecord>, DashboardServiceError>;

    /// Usernames of order owners, one row per order.
    async fn users_with_orders(&self) -> Result<Vec<UserWithOrderRecord>, DashboardServiceError>;

    /// The five highest priced products.
    async fn five_most_expensive(&self)
    -> Result<Vec<ExpensiveProductRecord>, DashboardServiceError>;

    /// The five products with the largest ordered quantity.
    async fn five_most_popular(&self) -> Result<Vec<PopularProductRecord>, DashboardServiceError>;
}
