//! Order Records

use crate::{
    domain::{products::records::ProductId, users::records::UserId},
    ids::TypedId,
};

/// Status of the one order a user may have open.
pub const ACTIVE_STATUS: &str = "active";

/// Status of a finished order.
pub const COMPLETE_STATUS: &str = "complete";

/// Order Id
pub type OrderId = TypedId<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub user_id: UserId,

    /// Free text, conventionally [`ACTIVE_STATUS`] or [`COMPLETE_STATUS`].
    pub status: String,
}

impl OrderRecord {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// Order Product Id
pub type OrderProductId = TypedId<OrderProductRecord>;

/// A product placed in an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProductRecord {
    pub id: OrderProductId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}
