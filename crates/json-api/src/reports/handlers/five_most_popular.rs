//! Five Most Popular Products Report

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::dashboard::records::PopularProductRecord;

use crate::{extensions::*, reports::errors::into_status_error};

/// A product ranked by the quantity ordered across all orders.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct PopularProductResponse {
    pub id: i64,
    pub name: String,
    pub price: u64,
    pub category: String,
    pub total_quantity: u64,
}

impl From<PopularProductRecord> for PopularProductResponse {
    fn from(row: PopularProductRecord) -> Self {
        PopularProductResponse {
            id: row.id.into_i64(),
            name: row.name,
            price: row.price,
            category: row.category,
            total_quantity: row.total_quantity,
        }
    }
}

/// Five Most Popular Handler
#[endpoint(tags("reports"), summary = "Five Most Popular Products")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PopularProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let rows = state
        .app
        .dashboard
        .five_most_popular()
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
