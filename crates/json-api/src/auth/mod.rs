//! Authentication

pub(crate) mod middleware;
pub(crate) mod tokens;

/// Body of every 401 produced by the bearer check.
pub(crate) const ACCESS_DENIED: &str = "Access denied, invalid token, jwt token must be provided";
