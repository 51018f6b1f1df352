//! Orders and the products placed in them.

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
