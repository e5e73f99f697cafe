use chrono::{DateTime, Utc};

use crate::domain::models::credential::HashedPassword;

pub type UserId = i32;

/// Registration input after request validation has accepted it
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// A user that has not been persisted yet.
///
/// The store assigns the identifier; `updated_time` stays unset on creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    username: String,
    password_hash: HashedPassword,
    email: String,
    created_time: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: String,
        password_hash: HashedPassword,
        email: String,
        created_time: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            email,
            created_time,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    /// Attach the store-assigned identifier
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            email: self.email,
            created_time: self.created_time,
            updated_time: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: HashedPassword,
    email: String,
    created_time: DateTime<Utc>,
    updated_time: Option<DateTime<Utc>>,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        self.updated_time
    }
}
