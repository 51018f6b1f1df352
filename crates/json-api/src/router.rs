//! App Router

use salvo::Router;

use crate::{auth, healthcheck, home, orders, products, reports, users};

/// Routes anyone may call.
pub(crate) fn public_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("category/{category}").get(products::category::handler))
                .push(Router::with_path("{id:num}").get(products::get::handler)),
        )
        .push(
            Router::with_path("users")
                .post(users::create::handler)
                .push(Router::with_path("authenticate").post(users::authenticate::handler)),
        )
        .push(Router::with_path("five-most-expensive").get(reports::five_most_expensive::handler))
        .push(Router::with_path("five-most-popular").get(reports::five_most_popular::handler))
}

/// Routes behind the bearer token check.
pub(crate) fn protected_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("users").get(users::index::handler).push(
                Router::with_path("{id:num}")
                    .get(users::get::handler)
                    .put(users::update::handler)
                    .delete(users::delete::handler),
            ),
        )
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{id:num}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("current/{user_id:num}").get(orders::current::handler))
                .push(
                    Router::with_path("completed/{user_id:num}").get(orders::completed::handler),
                )
                .push(
                    Router::with_path("{order_id:num}/products")
                        .get(orders::products::index::handler)
                        .post(orders::products::create::handler)
                        .delete(orders::products::delete::handler),
                )
                .push(
                    Router::with_path("{id:num}")
                        .get(orders::get::handler)
                        .put(orders::update::handler)
                        .delete(orders::delete::handler),
                ),
        )
        .push(Router::with_path("products_in_orders").get(reports::products_in_orders::handler))
        .push(Router::with_path("users-with-orders").get(reports::users_with_orders::handler))
}

pub(crate) fn app_router() -> Router {
    Router::new().push(public_router()).push(protected_router())
}
