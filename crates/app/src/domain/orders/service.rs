//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction, error::DatabaseError};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{NewOrder, NewOrderProduct, OrderUpdate},
            errors::OrdersServiceError,
            records::{
                ACTIVE_STATUS, COMPLETE_STATUS, OrderId, OrderProductRecord, OrderRecord,
            },
            repositories::{PgOrderProductsRepository, PgOrdersRepository},
        },
        products::records::ProductId,
        users::records::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderProductsRepository::new(),
        }
    }

    /// Lock `order` and check products may still change on it.
    async fn lock_active_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let record = self
            .orders_repository
            .lock_order(tx, order)
            .await?
            .ok_or(OrdersServiceError::OrderNotFound { order })?;

        if !record.is_active() {
            return Err(OrdersServiceError::OrderNotActive {
                order,
                status: record.status,
            });
        }

        Ok(record)
    }
}

fn second_active_order(user: UserId) -> impl FnOnce(sqlx::Error) -> OrdersServiceError {
    move |error| {
        if error
            .as_database_error()
            .is_some_and(DatabaseError::is_unique_violation)
        {
            OrdersServiceError::ActiveOrderExists { user }
        } else {
            error.into()
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderId) -> Result<Option<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.orders_repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn current_order(&self, user: UserId) -> Result<Option<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .find_orders_by_status(&mut tx, user, ACTIVE_STATUS)
            .await?;

        tx.commit().await?;

        Ok(orders.into_iter().next())
    }

    async fn completed_orders(&self, user: UserId) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .find_orders_by_status(&mut tx, user, COMPLETE_STATUS)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(
            user_id = %order.user_id,
            status = %order.status,
            order_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let user = order.user_id;

        let mut tx = self.db.begin().await?;

        if !self.orders_repository.lock_user(&mut tx, user).await? {
            return Err(OrdersServiceError::InvalidReference);
        }

        let current = self
            .orders_repository
            .find_orders_by_status(&mut tx, user, ACTIVE_STATUS)
            .await?;

        if !current.is_empty() {
            return Err(OrdersServiceError::ActiveOrderExists { user });
        }

        let created = self
            .orders_repository
            .create_order(&mut tx, user, &order.status)
            .await
            .map_err(second_active_order(user))?;

        tx.commit().await?;

        Span::current().record("order_id", created.id.into_i64());

        info!(order_id = %created.id, "created order");

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.update_order",
        skip(self, update),
        fields(order_id = %order, user_id = %update.user_id, status = %update.status),
        err
    )]
    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<Option<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .orders_repository
            .update_order(&mut tx, order, update.user_id, &update.status)
            .await
            .map_err(second_active_order(update.user_id))?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_id = %order),
        err
    )]
    async fn delete_order(
        &self,
        order: OrderId,
    ) -> Result<Option<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.orders_repository.delete_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(deleted)
    }

    async fn order_products(
        &self,
        order: OrderId,
    ) -> Result<Vec<OrderProductRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self
            .items_repository
            .list_order_products(&mut tx, order)
            .await?;

        tx.commit().await?;

        Ok(items)
    }

    #[tracing::instrument(
        name = "orders.service.add_product",
        skip(self, item),
        fields(
            order_id = %order,
            product_id = %item.product_id,
            quantity = item.quantity,
            order_product_id = tracing::field::Empty
        ),
        err
    )]
    async fn add_product(
        &self,
        order: OrderId,
        item: NewOrderProduct,
    ) -> Result<OrderProductRecord, OrdersServiceError> {
        let quantity = i32::try_from(item.quantity)?;

        let mut tx = self.db.begin().await?;

        self.lock_active_order(&mut tx, order).await?;

        let created = self
            .items_repository
            .create_order_product(&mut tx, order, item.product_id, quantity)
            .await?;

        tx.commit().await?;

        Span::current().record("order_product_id", created.id.into_i64());

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.remove_product",
        skip(self),
        fields(order_id = %order, product_id = %product, removed = tracing::field::Empty),
        err
    )]
    async fn remove_product(
        &self,
        order: OrderId,
        product: ProductId,
    ) -> Result<Vec<OrderProductRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_active_order(&mut tx, order).await?;

        let removed = self
            .items_repository
            .delete_order_products(&mut tx, order, product)
            .await?;

        tx.commit().await?;

        Span::current().record("removed", removed.len());

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// The user's active order, if any.
    async fn current_order(&self, user: UserId) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// The user's completed orders.
    async fn completed_orders(&self, user: UserId) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Creates an order, provided the user has no active order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Overwrites an order.
    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// Deletes an order and returns the removed row.
    async fn delete_order(&self, order: OrderId) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// Products placed in an order.
    async fn order_products(
        &self,
        order: OrderId,
    ) -> Result<Vec<OrderProductRecord>, OrdersServiceError>;

    /// Places a product in an active order.
    async fn add_product(
        &self,
        order: OrderId,
        item: NewOrderProduct,
    ) -> Result<OrderProductRecord, OrdersServiceError>;

    /// Removes every row for `product` from an active order and returns them.
    async fn remove_product(
        &self,
        order: OrderId,
        product: ProductId,
    ) -> Result<Vec<OrderProductRecord>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::users::UsersService,
        test::{
            TestContext,
            helpers::{add_product, create_active_order, create_product, new_user},
        },
    };

    use super::*;

    async fn complete_order(ctx: &TestContext, order: &OrderRecord) -> TestResult<OrderRecord> {
        let updated = ctx
            .orders
            .update_order(
                order.id,
                OrderUpdate {
                    user_id: order.user_id,
                    status: COMPLETE_STATUS.to_string(),
                },
            )
            .await?
            .ok_or("order should exist")?;

        Ok(updated)
    }

    #[tokio::test]
    async fn create_order_without_active_order_succeeds() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;

        let order = create_active_order(&ctx, user.id).await?;

        assert_eq!(order.user_id, user.id);
        assert_eq!(order.status, ACTIVE_STATUS);
        assert_eq!(ctx.orders.current_order(user.id).await?, Some(order));

        Ok(())
    }

    #[tokio::test]
    async fn create_second_order_while_active_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;

        create_active_order(&ctx, user.id).await?;

        let result = create_active_order(&ctx, user.id).await;

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::ActiveOrderExists { user: u }) if u == user.id
            ),
            "expected ActiveOrderExists, got {result:?}"
        );
        assert_eq!(ctx.orders.list_orders().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_order_creation_allows_one_active_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;

        let (first, second) = tokio::join!(
            create_active_order(&ctx, user.id),
            create_active_order(&ctx, user.id),
        );

        assert!(
            first.is_ok() != second.is_ok(),
            "exactly one order should be created, got {first:?} and {second:?}"
        );
        assert_eq!(ctx.orders.list_orders().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_order_after_completing_previous_succeeds() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let first = create_active_order(&ctx, user.id).await?;

        complete_order(&ctx, &first).await?;

        let second = create_active_order(&ctx, user.id).await?;

        assert_eq!(ctx.orders.current_order(user.id).await?, Some(second));

        Ok(())
    }

    #[tokio::test]
    async fn create_order_for_unknown_user_is_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = create_active_order(&ctx, UserId::from_i64(404)).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn reactivating_order_while_another_is_active_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let first = create_active_order(&ctx, user.id).await?;

        complete_order(&ctx, &first).await?;
        create_active_order(&ctx, user.id).await?;

        let result = ctx
            .orders
            .update_order(
                first.id,
                OrderUpdate {
                    user_id: user.id,
                    status: ACTIVE_STATUS.to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::ActiveOrderExists { .. })),
            "expected ActiveOrderExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn completed_orders_lists_only_complete_orders() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let first = create_active_order(&ctx, user.id).await?;
        let first = complete_order(&ctx, &first).await?;

        create_active_order(&ctx, user.id).await?;

        assert_eq!(ctx.orders.completed_orders(user.id).await?, vec![first]);

        Ok(())
    }

    #[tokio::test]
    async fn current_order_is_none_without_active_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;

        assert!(ctx.orders.current_order(user.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn add_product_to_active_order_persists_row() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        let item = add_product(&ctx, order.id, product.id, 3).await?;

        assert_eq!(item.order_id, order.id);
        assert_eq!(item.product_id, product.id);
        assert_eq!(item.quantity, 3);
        assert_eq!(ctx.orders.order_products(order.id).await?, vec![item]);

        Ok(())
    }

    #[tokio::test]
    async fn add_product_to_complete_order_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        complete_order(&ctx, &order).await?;

        let result = add_product(&ctx, order.id, product.id, 1).await;

        assert!(
            matches!(
                &result,
                Err(OrdersServiceError::OrderNotActive { order: o, status })
                    if *o == order.id && status == COMPLETE_STATUS
            ),
            "expected OrderNotActive, got {result:?}"
        );
        assert!(ctx.orders.order_products(order.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_product_to_unknown_order_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        let result = add_product(&ctx, OrderId::from_i64(404), product.id, 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::OrderNotFound { .. })),
            "expected OrderNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_product_is_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;

        let result = add_product(&ctx, order.id, ProductId::from_i64(404), 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_product_with_zero_quantity_is_invalid() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        let result = add_product(&ctx, order.id, product.id, 0).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_product_deletes_matching_rows_of_that_order_only() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = ctx.users.create_user(new_user("ada")).await?;
        let grace = ctx.users.create_user(new_user("grace")).await?;
        let ada_order = create_active_order(&ctx, ada.id).await?;
        let grace_order = create_active_order(&ctx, grace.id).await?;
        let guitar = create_product(&ctx, "Guitar", 350, "Music instruments").await?;
        let drum = create_product(&ctx, "Drum", 200, "Music instruments").await?;

        let first = add_product(&ctx, ada_order.id, guitar.id, 1).await?;
        let second = add_product(&ctx, ada_order.id, guitar.id, 2).await?;
        let kept = add_product(&ctx, ada_order.id, drum.id, 1).await?;
        let other = add_product(&ctx, grace_order.id, guitar.id, 5).await?;

        let mut removed = ctx.orders.remove_product(ada_order.id, guitar.id).await?;
        removed.sort_by_key(|item| item.id);

        assert_eq!(removed, vec![first, second]);
        assert_eq!(ctx.orders.order_products(ada_order.id).await?, vec![kept]);
        assert_eq!(ctx.orders.order_products(grace_order.id).await?, vec![other]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_product_not_in_order_returns_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        assert!(ctx.orders.remove_product(order.id, product.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_product_from_complete_order_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        add_product(&ctx, order.id, product.id, 1).await?;
        complete_order(&ctx, &order).await?;

        let result = ctx.orders.remove_product(order.id, product.id).await;

        assert!(
            matches!(result, Err(OrdersServiceError::OrderNotActive { .. })),
            "expected OrderNotActive, got {result:?}"
        );
        assert_eq!(ctx.orders.order_products(order.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_then_list_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;

        let deleted = ctx.orders.delete_order(order.id).await?;

        assert_eq!(deleted, Some(order.clone()));
        assert!(ctx.orders.get_order(order.id).await?.is_none());
        assert!(ctx.orders.list_orders().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.orders.delete_order(OrderId::from_i64(404)).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_with_products_is_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.create_user(new_user("ada")).await?;
        let order = create_active_order(&ctx, user.id).await?;
        let product = create_product(&ctx, "Guitar", 350, "Music instruments").await?;

        add_product(&ctx, order.id, product.id, 1).await?;

        let result = ctx.orders.delete_order(order.id).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }
}
