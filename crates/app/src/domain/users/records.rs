//! User Records

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// Argon2 PHC string of `password + pepper`.
    pub password_digest: String,
}
