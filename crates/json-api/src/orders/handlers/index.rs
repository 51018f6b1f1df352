//! Order Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

/// Order Index Handler
#[endpoint(tags("orders"), summary = "List Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
