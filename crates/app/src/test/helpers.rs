//! Test Helpers

use crate::{
    domain::{
        orders::{
            OrdersService, OrdersServiceError,
            data::{NewOrder, NewOrderProduct},
            records::{ACTIVE_STATUS, OrderId, OrderProductRecord, OrderRecord},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductId, ProductRecord},
        },
        users::{data::NewUser, records::UserId},
    },
    test::TestContext,
};

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "password123".to_string(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
    category: &str,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            name: name.to_string(),
            price,
            category: category.to_string(),
        })
        .await
}

pub(crate) async fn create_active_order(
    ctx: &TestContext,
    user: UserId,
) -> Result<OrderRecord, OrdersServiceError> {
    ctx.orders
        .create_order(NewOrder {
            user_id: user,
            status: ACTIVE_STATUS.to_string(),
        })
        .await
}

pub(crate) async fn add_product(
    ctx: &TestContext,
    order: OrderId,
    product: ProductId,
    quantity: u32,
) -> Result<OrderProductRecord, OrdersServiceError> {
    ctx.orders
        .add_product(
            order,
            NewOrderProduct {
                product_id: product,
                quantity,
            },
        )
        .await
}
