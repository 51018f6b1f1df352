//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        dashboard::MockDashboardService,
        orders::MockOrdersService,
        products::MockProductsService,
        users::{MockUsersService, records::UserId},
    },
};

use crate::{catcher, extensions::*, state::State};

pub(crate) const TEST_USER_ID: UserId = UserId::from_i64(1);

/// Stands in for the auth middleware on protected routes.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

/// Mocks for every service; unused ones reject any call.
pub(crate) struct Mocks {
    pub users: MockUsersService,
    pub products: MockProductsService,
    pub orders: MockOrdersService,
    pub dashboard: MockDashboardService,
    pub auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            users: strict_users_mock(),
            products: strict_products_mock(),
            orders: strict_orders_mock(),
            dashboard: strict_dashboard_mock(),
            auth: strict_auth_mock(),
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            users: Arc::new(self.users),
            products: Arc::new(self.products),
            orders: Arc::new(self.orders),
            dashboard: Arc::new(self.dashboard),
            auth: Arc::new(self.auth),
        })
    }

    /// Serve `route` with these mocks injected and the test user signed in.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
        .catcher(catcher::plain_text())
    }
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Mocks {
        users,
        ..Mocks::default()
    }
    .service(route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Mocks {
        products,
        ..Mocks::default()
    }
    .service(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Mocks {
        orders,
        ..Mocks::default()
    }
    .service(route)
}

pub(crate) fn dashboard_service(dashboard: MockDashboardService, route: Router) -> Service {
    Mocks {
        dashboard,
        ..Mocks::default()
    }
    .service(route)
}

pub(crate) fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_authenticate().never();
    users.expect_update_user().never();
    users.expect_delete_user().never();

    users
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_list_products_by_category().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_current_order().never();
    orders.expect_completed_orders().never();
    orders.expect_create_order().never();
    orders.expect_update_order().never();
    orders.expect_delete_order().never();
    orders.expect_order_products().never();
    orders.expect_add_product().never();
    orders.expect_remove_product().never();

    orders
}

pub(crate) fn strict_dashboard_mock() -> MockDashboardService {
    let mut dashboard = MockDashboardService::new();

    dashboard.expect_products_in_orders().never();
    dashboard.expect_users_with_orders().never();
    dashboard.expect_five_most_expensive().never();
    dashboard.expect_five_most_popular().never();

    dashboard
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_issue_token().never();
    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}
