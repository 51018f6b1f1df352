//! Create Order Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::{orders::data::NewOrder, users::records::UserId};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub user_id: i64,
    pub status: String,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            user_id: UserId::from_i64(request.user_id),
            status: request.status,
        }
    }
}

/// Create Order Handler
///
/// Rejected while the user already has an active order.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "User already has an active order"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;

    let order = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, order_id = %order.id, user_id = %order.user_id, "created order");

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
