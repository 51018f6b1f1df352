//! Products By Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Products By Category Handler
///
/// An unknown category yields an empty list.
#[endpoint(tags("products"), summary = "List Products In Category")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .app
        .products
        .list_products_by_category(&category.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
