//! Test context for service-level integration tests.

use crate::{
    auth::Passwords,
    database::Db,
    domain::{
        dashboard::PgDashboardService, orders::PgOrdersService, products::PgProductsService,
        users::PgUsersService,
    },
};

use super::db::TestDb;

const TEST_PEPPER: &str = "test-pepper";

pub(crate) struct TestContext {
    pub db: TestDb,
    pub users: PgUsersService,
    pub products: PgProductsService,
    pub orders: PgOrdersService,
    pub dashboard: PgDashboardService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            users: PgUsersService::new(db.clone(), Passwords::new(TEST_PEPPER)),
            products: PgProductsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            dashboard: PgDashboardService::new(db),
            db: test_db,
        }
    }
}
