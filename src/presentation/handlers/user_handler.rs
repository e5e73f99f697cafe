use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    domain::{
        models::{response::ApiResponse, user::RegisterUser},
        repositories::user_repository::UserRepository,
        services::password_service::PasswordHasher,
    },
    presentation::error::ApiError,
    usecase::register_user_usecase::RegisterUserUsecase,
};

// Request

/// json for register request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 6, max = 16, message = "username must be 6 to 16 characters"),
        custom(function = "validate_username_charset")
    )]
    pub username: String,

    #[validate(length(min = 6, max = 20, message = "password must be 6 to 20 characters"))]
    pub password: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            password: request.password,
            email: request.email,
        }
    }
}

/// Usernames are ASCII letters and digits or CJK unified ideographs (U+4E00..=U+9FA5)
fn validate_username_charset(username: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c);
    if !username.chars().all(allowed) {
        return Err(ValidationError::new("username_charset")
            .with_message("username may only contain letters, digits and Chinese characters".into()));
    }
    Ok(())
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested under `/user` by main router

pub fn create_user_router<
    U: UserRepository + Send + Sync + 'static + Clone,
    P: PasswordHasher + Send + Sync + 'static + Clone,
>(
    register_service: RegisterUserUsecase<U, P>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<U, P>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<U: UserRepository, P: PasswordHasher> {
    pub register_service: Arc<RegisterUserUsecase<U, P>>,
}

// handler function

/// handler function for register
///
/// The envelope code is application-level; the transport status stays 200
/// whenever the workflow completes.
async fn register<U: UserRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<U, P>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    payload.validate()?;

    let response = state.register_service.register(payload.into()).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn request(username: &str, password: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        }
    }

    #[rstest]
    #[case("abcde", false)]
    #[case("abcdef", true)]
    #[case("abcdefghijklmnop", true)]
    #[case("abcdefghijklmnopq", false)]
    #[case("用户名称测试", true)]
    #[case("张三abc123", true)]
    #[case("alice_01", false)]
    #[case("alice 01", false)]
    #[case("ålice01", false)]
    fn username_rules(#[case] username: &str, #[case] valid: bool) {
        let result = request(username, "secret123", "alice@example.com").validate();

        assert_eq!(result.is_ok(), valid, "{username}");
        if let Err(errors) = result {
            assert!(errors.field_errors().contains_key("username"));
        }
    }

    #[rstest]
    #[case("abcde", false)]
    #[case("abcdef", true)]
    #[case("abcdefghijklmnopqrst", true)]
    #[case("abcdefghijklmnopqrstu", false)]
    fn password_length_rules(#[case] password: &str, #[case] valid: bool) {
        let result = request("alice01", password, "alice@example.com").validate();

        assert_eq!(result.is_ok(), valid, "{password}");
    }

    #[rstest]
    #[case("alice@example.com", true)]
    #[case("alice.example.com", false)]
    #[case("", false)]
    fn email_rules(#[case] email: &str, #[case] valid: bool) {
        let result = request("alice01", "secret123", email).validate();

        assert_eq!(result.is_ok(), valid, "{email}");
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let errors = request("abc", "123", "nope").validate().unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }
}
