//! Product Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Product Index Handler
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
