//! Delete Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use storefront_app::domain::orders::records::OrderId;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Delete Order Handler
///
/// Returns the removed order, `null` for an unknown id. Orders that still
/// hold products cannot be deleted.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Removed order, or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Order still holds products"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let order = OrderId::from_i64(id.into_inner());

    let deleted = state
        .app
        .orders
        .delete_order(order)
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, order_id = %order, found = deleted.is_some(), "deleted order");

    Ok(Json(deleted.map(OrderResponse::from)))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderRecord,
    };
    use testresult::TestResult;

    use crate::test_helpers::orders_service;

    use super::{super::tests::make_order, *};

    fn make_service(result: Result<Option<OrderRecord>, OrdersServiceError>) -> Service {
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .withf(|order| *order == OrderId::from_i64(5))
            .return_once(move |_| result);

        orders.expect_list_orders().never();
        orders.expect_get_order().never();
        orders.expect_current_order().never();
        orders.expect_completed_orders().never();
        orders.expect_create_order().never();
        orders.expect_update_order().never();
        orders.expect_order_products().never();
        orders.expect_add_product().never();
        orders.expect_remove_product().never();

        orders_service(orders, Router::with_path("orders/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_order_success() -> TestResult {
        let mut res = TestClient::delete("http://example.com/orders/5")
            .send(&make_service(Ok(Some(make_order(5, 1, "complete")))))
            .await;

        let body: OrderResponse = res
            .take_json::<Option<OrderResponse>>()
            .await?
            .ok_or("expected the removed order")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_order_returns_null() -> TestResult {
        let mut res = TestClient::delete("http://example.com/orders/5")
            .send(&make_service(Ok(None)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(res.take_string().await?, "null");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_order_with_products_returns_400() {
        let res = TestClient::delete("http://example.com/orders/5")
            .send(&make_service(Err(OrdersServiceError::InvalidReference)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
