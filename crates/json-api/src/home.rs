//! API banner.

use salvo::prelude::*;

/// Home handler
///
/// Plain-text banner confirming the API is up.
#[endpoint(tags("health"), summary = "API banner")]
pub(crate) async fn handler() -> &'static str {
    "This is API"
}
