use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use easy_privacy_types::error::WireError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Serialize)]
pub(crate) struct JsonError {
    pub(crate) error_message: String,
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Unable to read policy query. {0}")]
    Query(#[from] WireError),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("error {}", self);
        let error_message = self.to_string();
        (self.as_status_code(), Json(JsonError { error_message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_are_bad_requests() {
        let response = ApiError::from(WireError::Query("bad key".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
