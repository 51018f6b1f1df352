//! Products

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub(crate) use repository::try_get_price;
pub use service::*;
