//! Order Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::records::OrderProductRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

/// A product placed in an order.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct OrderProductResponse {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: u32,
}

impl From<OrderProductRecord> for OrderProductResponse {
    fn from(item: OrderProductRecord) -> Self {
        OrderProductResponse {
            id: item.id.into_i64(),
            order_id: item.order_id.into_i64(),
            product_id: item.product_id.into_i64(),
            quantity: item.quantity,
        }
    }
}
