//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::records::{ProductId, ProductRecord};

use crate::{extensions::*, products::errors::into_status_error};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,

    /// Price in minor currency units
    pub price: u64,
    pub category: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            category: product.category,
        }
    }
}

/// Get Product Handler
///
/// Answers `null` for an unknown id.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product, or null"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.map(ProductResponse::from)))
}
