//! HTTP response conversion for bridge errors.

use crate::{BridgeError, BridgeErrorKind};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

impl From<JsonRejection> for BridgeError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        BridgeError::new(BridgeErrorKind::InvalidBody {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        })
    }
}
