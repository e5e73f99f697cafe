use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        response::ApiResponse,
        status::ResponseStatus,
        user::{NewUser, RegisterUser},
    },
    repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
};

/// Envelope returned when the username or email is taken.
///
/// Pairs the generic failure code with the conflict message; clients match on
/// this exact body.
pub fn username_or_email_taken() -> ApiResponse {
    ApiResponse::failure_with(
        ResponseStatus::Fail.code(),
        ResponseStatus::EmailOrUsernameExists.message(),
    )
}

pub struct RegisterUserUsecase<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    password_hasher: P,
}

impl<U: UserRepository, P: PasswordHasher> RegisterUserUsecase<U, P> {
    pub fn new(user_repository: U, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register a user whose input has already passed request validation.
    ///
    /// A taken username or email yields the conflict envelope, including when
    /// the store's unique constraint catches a concurrent registration.
    /// Any other store failure is returned as an error.
    #[tracing::instrument(name = "register_user", skip_all, fields(username = %request.username))]
    pub async fn register(&self, request: RegisterUser) -> Result<ApiResponse, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        if self
            .user_repository
            .exists_by_username_or_email(&request.username, &request.email)
            .await?
        {
            warn!("Username or email already registered");
            return Ok(username_or_email_taken());
        }

        let password_hash = self.password_hasher.hash(&request.password)?;
        let new_user = NewUser::new(request.username, password_hash, request.email, Utc::now());

        match self.user_repository.save(new_user).await {
            Ok(user) => {
                info!(user_id = user.id(), "User registered");
                Ok(ApiResponse::success())
            }
            Err(RepositoryError::UniqueViolation(detail)) => {
                warn!(%detail, "Unique constraint rejected registration");
                Ok(username_or_email_taken())
            }
            Err(e) => {
                error!(error = %e, "Failed to persist user");
                Err(e.into())
            }
        }
    }
}
