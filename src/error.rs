use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Write paths are switched off in this version, not broken.
    #[error("{0} method is not allowed")]
    MethodDisabled(&'static str),

    #[error("Place not found")]
    PlaceNotFound,

    #[error("Parking zone not found")]
    ZoneNotFound,

    // The read paths never pre-validate ids, so a malformed one surfaces
    // as a generic server error rather than a clean 400.
    #[error("Invalid place id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MethodDisabled { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PlaceNotFound => StatusCode::NOT_FOUND,
            AppError::ZoneNotFound => StatusCode::BAD_REQUEST,
            AppError::InvalidId { .. } | AppError::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
