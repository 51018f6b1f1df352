//! Users Data

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// Plaintext password; hashed before it reaches storage.
    pub password: String,
}

/// User Update Data
///
/// Every field is overwritten, the password is hashed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}
