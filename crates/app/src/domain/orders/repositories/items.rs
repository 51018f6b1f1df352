//! Order Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    orders::records::{OrderId, OrderProductId, OrderProductRecord},
    products::records::ProductId,
};

const LIST_ORDER_PRODUCTS_SQL: &str = include_str!("../sql/list_order_products.sql");
const CREATE_ORDER_PRODUCT_SQL: &str = include_str!("../sql/create_order_product.sql");
const DELETE_ORDER_PRODUCTS_SQL: &str = include_str!("../sql/delete_order_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderProductsRepository;

impl PgOrderProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_order_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Vec<OrderProductRecord>, sqlx::Error> {
        query_as::<Postgres, OrderProductRecord>(LIST_ORDER_PRODUCTS_SQL)
            .bind(order.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        product: ProductId,
        quantity: i32,
    ) -> Result<OrderProductRecord, sqlx::Error> {
        query_as::<Postgres, OrderProductRecord>(CREATE_ORDER_PRODUCT_SQL)
            .bind(order.into_i64())
            .bind(product.into_i64())
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        product: ProductId,
    ) -> Result<Vec<OrderProductRecord>, sqlx::Error> {
        query_as::<Postgres, OrderProductRecord>(DELETE_ORDER_PRODUCTS_SQL)
            .bind(order.into_i64())
            .bind(product.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: OrderProductId::from_i64(row.try_get("id")?),
            order_id: OrderId::from_i64(row.try_get("order_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity,
        })
    }
}
