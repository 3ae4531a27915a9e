//! Mapping of request failures to HTTP status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{error::PhonebookError, runtime::handle::RuntimeError};

/// Failure of a single HTTP request.
#[derive(Debug)]
pub enum ApiError {
    /// Domain failure: not found, invalid request, or conflict.
    Phonebook(PhonebookError),
    /// The store task could not be reached.
    Runtime(RuntimeError),
}

impl From<PhonebookError> for ApiError {
    fn from(value: PhonebookError) -> Self {
        Self::Phonebook(value)
    }
}

impl From<RuntimeError> for ApiError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub error: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ApiError {
    /// HTTP status this failure is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Phonebook(PhonebookError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Phonebook(PhonebookError::InvalidRequest { .. }) => StatusCode::BAD_REQUEST,
            Self::Phonebook(PhonebookError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Runtime(RuntimeError::ChannelClosed) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// JSON payload this failure is reported with.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Phonebook(err) => ErrorBody {
                error: err.code(),
                message: err.to_string(),
            },
            Self::Runtime(err) => ErrorBody {
                error: "unavailable",
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
