//! Cross-origin policy.

use salvo::cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler};

/// Any origin may call the API with any method and header.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
