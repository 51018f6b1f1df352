//! Authenticated user depot helpers.

use salvo::prelude::{Depot, StatusError};
use storefront_app::domain::users::records::UserId;

const USER_ID_DEPOT_KEY: &str = "storefront.user_id";

pub(crate) trait UserDepotExt {
    fn insert_user_id(&mut self, user: UserId);

    fn user_id_or_401(&self) -> Result<UserId, StatusError>;
}

impl UserDepotExt for Depot {
    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_DEPOT_KEY, user);
    }

    fn user_id_or_401(&self) -> Result<UserId, StatusError> {
        self.get::<UserId>(USER_ID_DEPOT_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }
}
