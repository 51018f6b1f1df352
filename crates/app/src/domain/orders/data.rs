//! Orders Data

use crate::domain::{products::records::ProductId, users::records::UserId};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub status: String,
}

/// Order Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    pub user_id: UserId,
    pub status: String,
}

/// New Order Product Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderProduct {
    pub product_id: ProductId,
    pub quantity: u32,
}
