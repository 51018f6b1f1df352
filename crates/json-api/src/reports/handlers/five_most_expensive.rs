//! Five Most Expensive Products Report

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::dashboard::records::ExpensiveProductRecord;

use crate::{extensions::*, reports::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ExpensiveProductResponse {
    pub name: String,
    pub price: u64,
}

impl From<ExpensiveProductRecord> for ExpensiveProductResponse {
    fn from(row: ExpensiveProductRecord) -> Self {
        ExpensiveProductResponse {
            name: row.name,
            price: row.price,
        }
    }
}

/// Five Most Expensive Handler
#[endpoint(tags("reports"), summary = "Five Most Expensive Products")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ExpensiveProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let rows = state
        .app
        .dashboard
        .five_most_expensive()
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
