//! Get Order Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::records::{OrderId, OrderRecord};

use crate::{extensions::*, orders::errors::into_status_error};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id.into_i64(),
            user_id: order.user_id.into_i64(),
            status: order.status,
        }
    }
}

/// Get Order Handler
///
/// Answers `null` for an unknown id.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order, or null"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let order = state
        .app
        .orders
        .get_order(OrderId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.map(OrderResponse::from)))
}
