use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::{error::DomainError, models::response::ApiResponse};

pub const INVALID_REQUEST_MESSAGE: &str = "invalid request parameters";

/// Failures surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiResponse::failure_with_data(status.as_u16(), INVALID_REQUEST_MESSAGE, errors);
                (status, Json(body)).into_response()
            }
            Self::Domain(e) => {
                error!(error = %e, "Request failed");
                let body: ApiResponse = ApiResponse::failure();
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use validator::ValidationError;

    use super::*;
    use crate::domain::error::RepositoryError;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_bad_request_with_field_detail() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        let response = ApiError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!(400));
        assert_eq!(body["msg"], json!(INVALID_REQUEST_MESSAGE));
        assert!(body["data"]["email"].is_array());
    }

    #[tokio::test]
    async fn domain_error_is_internal_error_with_failure_envelope() {
        let error = DomainError::from(RepositoryError::DatabaseError("connection refused".to_string()));

        let response = ApiError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "code": 500, "msg": "failure" }));
    }
}
