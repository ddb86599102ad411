use crate::update::UpdateError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failures returned to the caller as `{ success: false, ... }`.
#[derive(Debug)]
pub enum ApiError {
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 401 Unauthorized
    Unauthorized,
    /// 500 Internal Server Error, carrying the underlying message
    Server(String),
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            ApiError::Server(error) => {
                log::error!("update failed: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error", Some(error))
            }
        };

        let body = Json(FailureBody {
            success: false,
            message,
            error,
        });

        (status, body).into_response()
    }
}

impl From<UpdateError> for ApiError {
    fn from(err: UpdateError) -> Self {
        match err {
            UpdateError::Unauthorized => ApiError::Unauthorized,
            other => ApiError::Server(other.to_string()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Server(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Server(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ContentError;

    #[test]
    fn should_map_unauthorized() {
        let error = ApiError::from(UpdateError::Unauthorized);

        assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn should_map_everything_else_to_server_error() {
        let write = ApiError::from(UpdateError::Write(ContentError::Remote {
            status: 409,
            message: "conflict".to_owned(),
        }));
        let malformed = ApiError::from(UpdateError::Malformed("missing field `data`".to_owned()));

        assert!(matches!(&write, ApiError::Server(message) if message == "conflict"));
        assert_eq!(
            malformed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
