//! Service-level test support.

mod context;
mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
