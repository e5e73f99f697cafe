use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

/// Persistence of user records
#[async_trait]
pub trait UserRepository {
    /// True when any stored user already has this username or this email
    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, RepositoryError>;

    /// Insert a new user and return it with its assigned identifier.
    ///
    /// Fails with `RepositoryError::UniqueViolation` when the table's unique
    /// constraints reject the row.
    async fn save(&self, user: NewUser) -> Result<User, RepositoryError>;
}
