//! Order Repositories

mod items;
mod orders;

pub(crate) use items::PgOrderProductsRepository;
pub(crate) use orders::PgOrdersRepository;
