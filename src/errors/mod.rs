/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error body returned to callers of the JSON routes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Failure of the single outbound call a route makes
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),
    #[error("Malformed upstream response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", missing_message(.0))]
    MissingParams(Vec<&'static str>),
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl ApiError {
    pub fn upstream(context: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| ApiError::Upstream { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParams(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn missing_message(params: &[&'static str]) -> String {
    match params {
        [single] => format!("Missing required parameter: {single}"),
        [init @ .., last] => {
            format!("Missing required parameters: {} and {last}", init.join(", "))
        }
        [] => "Missing required parameters".to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::MissingParams(params) => ErrorResponse {
                error: missing_message(&params),
                details: None,
            },
            ApiError::Upstream { context, source } => ErrorResponse {
                error: context.to_string(),
                details: Some(source.to_string()),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_missing_param_message() {
        let err = ApiError::MissingParams(vec!["date"]);
        assert_eq!(err.to_string(), "Missing required parameter: date");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_two_missing_params_message() {
        let err = ApiError::MissingParams(vec!["date", "camera"]);
        assert_eq!(
            err.to_string(),
            "Missing required parameters: date and camera"
        );
    }

    #[test]
    fn test_three_missing_params_message() {
        let err = ApiError::MissingParams(vec!["a", "b", "c"]);
        assert_eq!(err.to_string(), "Missing required parameters: a, b and c");
    }

    #[test]
    fn test_upstream_error_is_server_error() {
        let err = ApiError::upstream("Failed to fetch APOD")(UpstreamError::Status(503));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to fetch APOD: Request failed with status code 503"
        );
    }
}
