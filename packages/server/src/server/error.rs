//! HTTP mapping for domain errors.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::sample_app::SampleAppError;

impl SampleAppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SampleAppError::NotFound(_) => StatusCode::NOT_FOUND,
            SampleAppError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SampleAppError::InvalidRequest(_) | SampleAppError::UnknownJob(_) => {
                StatusCode::BAD_REQUEST
            }
            SampleAppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
    }

    /// Message safe to show to clients; store failures stay in the logs.
    fn public_message(&self) -> String {
        match self {
            SampleAppError::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Plain-text error response, used by the HTML routes
impl IntoResponse for SampleAppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.log(status);
        (status, self.public_message()).into_response()
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON error response, used by the `/api` routes
pub struct JsonError(pub SampleAppError);

impl From<SampleAppError> for JsonError {
    fn from(error: SampleAppError) -> Self {
        Self(error)
    }
}

impl From<PathRejection> for JsonError {
    fn from(rejection: PathRejection) -> Self {
        Self(SampleAppError::InvalidRequest(rejection.body_text()))
    }
}

impl From<JsonRejection> for JsonError {
    fn from(rejection: JsonRejection) -> Self {
        Self(SampleAppError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        self.0.log(status);
        (
            status,
            Json(ErrorResponse {
                error: self.0.public_message(),
            }),
        )
            .into_response()
    }
}
