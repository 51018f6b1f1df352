//! Dashboard Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    dashboard::records::{
        ExpensiveProductRecord, PopularProductRecord, ProductInOrderRecord, UserWithOrderRecord,
    },
    orders::records::OrderId,
    products::{records::ProductId, try_get_price},
};

const PRODUCTS_IN_ORDERS_SQL: &str = include_str!("sql/products_in_orders.sql");
const USERS_WITH_ORDERS_SQL: &str = include_str!("sql/users_with_orders.sql");
const MOST_EXPENSIVE_PRODUCTS_SQL: &str = include_str!("sql/most_expensive_products.sql");
const MOST_POPULAR_PRODUCTS_SQL: &str = include_str!("sql/most_popular_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDashboardRepository;

impl PgDashboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn products_in_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductInOrderRecord>, sqlx::Error> {
        query_as::<Postgres, ProductInOrderRecord>(PRODUCTS_IN_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn users_with_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<UserWithOrderRecord>, sqlx::Error> {
        query_as::<Postgres, UserWithOrderRecord>(USERS_WITH_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn most_expensive_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ExpensiveProductRecord>, sqlx::Error> {
        query_as::<Postgres, ExpensiveProductRecord>(MOST_EXPENSIVE_PRODUCTS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn most_popular_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<PopularProductRecord>, sqlx::Error> {
        query_as::<Postgres, PopularProductRecord>(MOST_POPULAR_PRODUCTS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }
}

fn decode_error(column: &str, error: std::num::TryFromIntError) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(error),
    }
}

impl<'r> FromRow<'r, PgRow> for ProductInOrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        Ok(Self {
            name: row.try_get("name")?,
            price: try_get_price(row, "price")?,
            order_id: OrderId::from_i64(row.try_get("order_id")?),
            quantity: u32::try_from(quantity).map_err(|e| decode_error("quantity", e))?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserWithOrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            username: row.try_get("username")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ExpensiveProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            price: try_get_price(row, "price")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PopularProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_quantity: i64 = row.try_get("total_quantity")?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: try_get_price(row, "price")?,
            category: row.try_get("category")?,
            total_quantity: u64::try_from(total_quantity)
                .map_err(|e| decode_error("total_quantity", e))?,
        })
    }
}
