//! Order Handlers

pub(crate) mod completed;
pub(crate) mod create;
pub(crate) mod current;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod products;
pub(crate) mod update;
