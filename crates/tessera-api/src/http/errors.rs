//! RFC9457-style API error wrapper.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tessera_api_models::ProblemDetails;
use tessera_telemetry::current_request_id;

use crate::http::constants::{
    PROBLEM_BAD_REQUEST, PROBLEM_INTERNAL, PROBLEM_METHOD_NOT_ALLOWED, PROBLEM_NOT_FOUND,
};

/// Structured API error rendered as a problem document.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) kind: &'static str,
    title: &'static str,
    detail: Option<String>,
}

impl ApiError {
    const fn new(status: StatusCode, kind: &'static str, title: &'static str) -> Self {
        Self {
            status,
            kind,
            title,
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            PROBLEM_INTERNAL,
            "internal server error",
        )
        .with_detail(message)
    }

    pub(crate) fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, PROBLEM_BAD_REQUEST, "bad request").with_detail(detail)
    }

    pub(crate) fn not_found(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            PROBLEM_NOT_FOUND,
            "resource not found",
        )
        .with_detail(detail)
    }

    pub(crate) const fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            PROBLEM_METHOD_NOT_ALLOWED,
            "method not allowed",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            request_id: current_request_id().filter(|id| !id.is_empty()),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;
    use tessera_telemetry::with_request_context;

    #[tokio::test]
    async fn problem_response_carries_status_and_document() {
        let response = ApiError::not_found("user 7 does not exist").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let problem: ProblemDetails = serde_json::from_slice(&bytes).expect("problem json");
        assert_eq!(problem.kind, PROBLEM_NOT_FOUND);
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail.as_deref(), Some("user 7 does not exist"));
        assert!(problem.request_id.is_none());
    }

    #[tokio::test]
    async fn problem_response_carries_active_request_id() {
        let response = with_request_context("req-9", "/users/{id}", async {
            ApiError::internal("failed to load user").into_response()
        })
        .await;
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let problem: ProblemDetails = serde_json::from_slice(&bytes).expect("problem json");
        assert_eq!(problem.request_id.as_deref(), Some("req-9"));
    }

    #[test]
    fn constructors_map_to_expected_status() {
        assert_eq!(
            ApiError::internal("boom").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::bad_request("bad").status, StatusCode::BAD_REQUEST);
        let method = ApiError::method_not_allowed();
        assert_eq!(method.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(method.kind, PROBLEM_METHOD_NOT_ALLOWED);
        assert!(method.detail.is_none());
    }
}
