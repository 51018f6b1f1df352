//! Storefront domain, persistence and authentication.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
