use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on a protected route.
    #[error("No authentication token provided")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Authentication token is invalid or expired")]
    InvalidToken,

    /// The token was valid but its user no longer exists.
    ///
    /// Happens when a token outlives its account. Treated the same as an
    /// invalid token so deleted accounts cannot be distinguished by probing.
    #[error("Token references unknown user {0}")]
    UserNotFound(String),

    /// Login was attempted with an unknown email or wrong password.
    ///
    /// A single variant covers both cases so responses do not reveal which
    /// part of the credentials was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authenticated user tried to operate on a resource owned by
    /// someone else.
    #[error("User {0} attempted to modify a resource they do not own")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential problems map to 401 Unauthorized, ownership problems
/// to 403 Forbidden. Internal detail (which user, which resource) is logged
/// rather than returned to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized, please log in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id) => {
                tracing::debug!("Access denied for user {}", user_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to modify this resource".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
