//! Products In Orders Report

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::dashboard::records::ProductInOrderRecord;

use crate::{extensions::*, reports::errors::into_status_error};

/// One product line of one order.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct ProductInOrderResponse {
    pub name: String,
    pub price: u64,
    pub order_id: i64,
    pub quantity: u32,
}

impl From<ProductInOrderRecord> for ProductInOrderResponse {
    fn from(row: ProductInOrderRecord) -> Self {
        ProductInOrderResponse {
            name: row.name,
            price: row.price,
            order_id: row.order_id.into_i64(),
            quantity: row.quantity,
        }
    }
}

/// Products In Orders Handler
#[endpoint(tags("reports"), summary = "Products In Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ProductInOrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let rows = state
        .app
        .dashboard
        .products_in_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
