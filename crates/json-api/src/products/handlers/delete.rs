//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use storefront_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Delete Product Handler
///
/// Returns the removed product, `null` for an unknown id. Products that
/// appear on any order cannot be deleted.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Removed product, or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product is on an order"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let product = ProductId::from_i64(id.into_inner());

    let deleted = state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, product_id = %product, found = deleted.is_some(), "deleted product");

    Ok(Json(deleted.map(ProductResponse::from)))
}
