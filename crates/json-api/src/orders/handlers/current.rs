//! Current Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::users::records::UserId;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Current Order Handler
///
/// The user's active order, `null` when there is none.
#[endpoint(
    tags("orders"),
    summary = "Current Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Active order, or null"),
    ),
)]
pub(crate) async fn handler(
    user_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let order = state
        .app
        .orders
        .current_order(UserId::from_i64(user_id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.map(OrderResponse::from)))
}
