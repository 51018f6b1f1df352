//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::error::DatabaseError;
use tracing::{Span, info};

use crate::{
    auth::Passwords,
    database::Db,
    domain::users::{
        data::{NewUser, UserUpdate},
        errors::UsersServiceError,
        records::{UserId, UserRecord},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
    passwords: Passwords,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db, passwords: Passwords) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
            passwords,
        }
    }
}

fn duplicate_username(username: &str) -> impl FnOnce(sqlx::Error) -> UsersServiceError + '_ {
    move |error| {
        if error
            .as_database_error()
            .is_some_and(DatabaseError::is_unique_violation)
        {
            UsersServiceError::DuplicateUser {
                username: username.to_owned(),
            }
        } else {
            error.into()
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let users = self.repository.list_users(&mut tx).await?;

        tx.commit().await?;

        Ok(users)
    }

    async fn get_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    #[tracing::instrument(
        name = "users.service.create_user",
        skip(self, user),
        fields(username = %user.username, user_id = tracing::field::Empty),
        err
    )]
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let password_digest = self.passwords.hash(&user.password).await?;

        let mut tx = self.db.begin().await?;

        if self
            .repository
            .find_user_by_username(&mut tx, &user.username)
            .await?
            .is_some()
        {
            return Err(UsersServiceError::DuplicateUser {
                username: user.username,
            });
        }

        let created = self
            .repository
            .create_user(&mut tx, &user, &password_digest)
            .await
            .map_err(duplicate_username(&user.username))?;

        tx.commit().await?;

        Span::current().record("user_id", created.id.into_i64());

        info!(user_id = %created.id, "created user");

        Ok(created)
    }

    #[tracing::instrument(
        name = "users.service.authenticate",
        skip(self, password),
        fields(user_id = tracing::field::Empty),
        err
    )]
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_user_by_username(&mut tx, username)
            .await?;

        tx.commit().await?;

        let Some(user) = user else {
            return Ok(None);
        };

        if !self
            .passwords
            .verify(password, &user.password_digest)
            .await?
        {
            return Ok(None);
        }

        Span::current().record("user_id", user.id.into_i64());

        Ok(Some(user))
    }

    #[tracing::instrument(
        name = "users.service.update_user",
        skip(self, update),
        fields(user_id = %user),
        err
    )]
    async fn update_user(
        &self,
        user: UserId,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, UsersServiceError> {
        let password_digest = self.passwords.hash(&update.password).await?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_user(&mut tx, user, &update, &password_digest)
            .await
            .map_err(duplicate_username(&update.username))?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "users.service.delete_user",
        skip(self),
        fields(user_id = %user),
        err
    )]
    async fn delete_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Retrieve a single user, `None` when the id is unknown.
    async fn get_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Creates a user, rejecting a username that is already taken.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Returns the user when the password matches, `None` otherwise.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Overwrites every field of a user.
    async fn update_user(
        &self,
        user: UserId,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Deletes a user and returns the removed row.
    async fn delete_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError>;
}
