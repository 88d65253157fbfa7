// Custom error types and conversions
// AppError gives consistent error responses in Axum

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Internal error: {0:#}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("{0}")]
    NotFound(String),
}

// Convert errors into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(e) => {
                // Log the detailed error here, don't expose it to the client
                tracing::error!("Internal server error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
            AppError::NotFound(message) => {
                tracing::debug!("Not found: {}", message);
                (StatusCode::NOT_FOUND, message)
            }
        };

        (status, error_message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Reasons a backend feed record is rejected
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    #[error("vehicle {plate}: price '{price}' is not a non-negative number")]
    InvalidPrice { plate: String, price: String },

    #[error("vehicle {plate}: year {year} is not plausible")]
    ImplausibleYear { plate: String, year: i64 },

    #[error("vehicle {plate}: mileage {mileage} is negative or too large")]
    InvalidMileage { plate: String, mileage: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_variant() {
        let not_found = AppError::NotFound("Vehicle 9 not found".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = AppError::from(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
