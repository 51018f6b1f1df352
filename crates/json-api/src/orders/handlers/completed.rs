//! Completed Orders Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::users::records::UserId;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Completed Orders Handler
#[endpoint(tags("orders"), summary = "Completed Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    user_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let orders = state
        .app
        .orders
        .completed_orders(UserId::from_i64(user_id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
