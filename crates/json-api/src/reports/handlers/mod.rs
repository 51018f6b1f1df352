//! Report Handlers

pub(crate) mod five_most_expensive;
pub(crate) mod five_most_popular;
pub(crate) mod products_in_orders;
pub(crate) mod users_with_orders;
