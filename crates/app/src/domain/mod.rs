//! Storefront Domain Concerns

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;
