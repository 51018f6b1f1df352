//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::products::{data::ProductUpdate, records::ProductId};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub price: u64,
    pub category: String,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
            category: request.category,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated product, or null for an unknown id"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<Option<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.user_id_or_401()?;
    let product = ProductId::from_i64(id.into_inner());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_id", product.into_i64());
    span.record("price", request.price);

    let updated = state
        .app
        .products
        .update_product(product, request.into())
        .await
        .map_err(into_status_error)?;

    info!(actor = %actor, found = updated.is_some(), "updated product");

    Ok(Json(updated.map(ProductResponse::from)))
}
