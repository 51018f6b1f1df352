//! Order Products Index Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::orders::records::OrderId;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, products::OrderProductResponse},
};

/// Order Products Index Handler
#[endpoint(tags("orders"), summary = "List Order Products", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    order_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let items = state
        .app
        .orders
        .order_products(OrderId::from_i64(order_id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
