//! Remove Order Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::{orders::records::OrderId, products::records::ProductId};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, products::OrderProductResponse},
};

/// Remove Order Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveOrderProductRequest {
    pub product_id: i64,
}

/// Remove Order Product Handler
///
/// Removes every line for the product and returns them; an empty list when
/// the product was not in the order.
#[endpoint(
    tags("orders"),
    summary = "Remove Product From Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching lines removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Order is missing or not active"),
    ),
)]
pub(crate) async fn handler(
    order_id: PathParam<i64>,
    json: JsonBody<RemoveOrderProductRequest>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let order = OrderId::from_i64(order_id.into_inner());
    let product = ProductId::from_i64(json.into_inner().product_id);

    let removed = state
        .app
        .orders
        .remove_product(order, product)
        .await
        .map_err(into_status_error)?;

    info!(
        actor = %actor,
        order_id = %order,
        product_id = %product,
        removed = removed.len(),
        "removed product from order"
    );

    Ok(Json(removed.into_iter().map(Into::into).collect()))
}
