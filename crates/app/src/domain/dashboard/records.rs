//! Report rows.

use crate::domain::{orders::records::OrderId, products::records::ProductId};

/// One product line of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInOrderRecord {
    pub name: String,
    pub price: u64,
    pub order_id: OrderId,
    pub quantity: u32,
}

/// A user, once per order they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithOrderRecord {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensiveProductRecord {
    pub name: String,
    pub price: u64,
}

/// A product with the quantity summed over every order it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub category: String,
    pub total_quantity: u64,
}
