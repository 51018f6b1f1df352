//! Add Order Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::{
    orders::{data::NewOrderProduct, records::OrderId},
    products::records::ProductId,
};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, products::OrderProductResponse},
};

/// Add Order Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddOrderProductRequest {
    pub product_id: i64,
    pub quantity: u32,
}

impl From<AddOrderProductRequest> for NewOrderProduct {
    fn from(request: AddOrderProductRequest) -> Self {
        NewOrderProduct {
            product_id: ProductId::from_i64(request.product_id),
            quantity: request.quantity,
        }
    }
}

/// Add Order Product Handler
///
/// Only an active order accepts products.
#[endpoint(
    tags("orders"),
    summary = "Add Product To Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Order is missing or not active"),
    ),
)]
#[tracing::instrument(
    name = "orders.products.add",
    skip(order_id, json, depot, res),
    fields(order_id = tracing::field::Empty, product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order_id: PathParam<i64>,
    json: JsonBody<AddOrderProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let order = OrderId::from_i64(order_id.into_inner());
    let item: NewOrderProduct = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("order_id", order.into_i64());
    span.record("product_id", item.product_id.into_i64());

    let added = state
        .app
        .orders
        .add_product(order, item)
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, quantity = added.quantity, "added product to order");

    res.status_code(StatusCode::CREATED);

    Ok(Json(added.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderProductRecord,
    };
    use testresult::TestResult;

    use crate::test_helpers::orders_service;

    use super::{super::tests::make_item, *};

    fn make_service(result: Result<OrderProductRecord, OrdersServiceError>) -> Service {
        let mut orders = MockOrdersService::new();

        orders
            .expect_add_product()
            .once()
            .withf(|order, item| {
                *order == OrderId::from_i64(4)
                    && *item
                        == NewOrderProduct {
                            product_id: ProductId::from_i64(9),
                            quantity: 3,
                        }
            })
            .return_once(move |_, _| result);

        orders.expect_list_orders().never();
        orders.expect_get_order().never();
        orders.expect_current_order().never();
        orders.expect_completed_orders().never();
        orders.expect_create_order().never();
        orders.expect_update_order().never();
        orders.expect_delete_order().never();
        orders.expect_order_products().never();
        orders.expect_remove_product().never();

        orders_service(
            orders,
            Router::with_path("orders/{order_id}/products").post(handler),
        )
    }

    fn request_body() -> serde_json::Value {
        json!({ "product_id": 9, "quantity": 3 })
    }

    #[tokio::test]
    async fn test_add_product_success() -> TestResult {
        let mut res = TestClient::post("http://example.com/orders/4/products")
            .json(&request_body())
            .send(&make_service(Ok(make_item(21, 4, 9, 3))))
            .await;

        let body: OrderProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, 21);
        assert_eq!(body.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_to_complete_order_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/orders/4/products")
            .json(&request_body())
            .send(&make_service(Err(OrdersServiceError::OrderNotActive {
                order: OrderId::from_i64(4),
                status: "complete".to_string(),
            })))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            res.take_string().await?,
            "order 4 is complete, products can only change on an active order"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_to_missing_order_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/orders/4/products")
            .json(&request_body())
            .send(&make_service(Err(OrdersServiceError::OrderNotFound {
                order: OrderId::from_i64(4),
            })))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.take_string().await?, "order 4 does not exist");

        Ok(())
    }
}
