//! Update Order Handler

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
    orders::{data::OrderUpdate, records::OrderId},
    users::records::UserId,
};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Update Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    pub user_id: i64,
    pub status: String,
}

impl From<UpdateOrderRequest> for OrderUpdate {
    fn from(request: UpdateOrderRequest) -> Self {
        OrderUpdate {
            user_id: UserId::from_i64(request.user_id),
            status: request.status,
        }
    }
}

/// Update Order Handler
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated order, or null for an unknown id"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<Option<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let order = OrderId::from_i64(id.into_inner());

    let updated = state
        .app
        .orders
        .update_order(order, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    if let Some(updated) = &updated {
        info!(actor = %actor, order_id = %order, status = %updated.status, "updated order");
    }

    Ok(Json(updated.map(OrderResponse::from)))
}
