use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, http::StatusCode};

pub mod base;
pub mod forty_two;
pub mod game;

// Header carrying the caller's session token.
pub const TOKEN_HEADER: &str = "token";

// Helper to build a JSON error response.
pub(crate) fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
