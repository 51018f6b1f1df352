//! Extension traits

mod result;
mod state;
mod user;

pub(crate) use result::ResultExt as _;
pub(crate) use state::StateDepotExt as _;
pub(crate) use user::UserDepotExt as _;
