//! 유스케이스 오류를 HTTP 응답으로 변환한다.

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::application::errors::{CompletionError, ReviewError};

#[derive(Debug)]
pub enum ApiError {
    /// 본문 파싱/크기/Content-Type 거부
    InvalidBody { status: StatusCode, detail: String },
    Review(ReviewError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    retry_after_secs: Option<u64>,
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self::Review(err)
    }
}

/// 본문 크기 초과만 413으로 두고, 나머지 본문 거부는 모두 400으로 통일한다.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::InvalidBody {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody { status, .. } => *status,
            Self::Review(ReviewError::EmptyCode) => StatusCode::BAD_REQUEST,
            Self::Review(ReviewError::Completion(err)) => completion_status(err),
        }
    }

    fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::Review(ReviewError::Completion(err)) => err.retry_after_secs(),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::InvalidBody { detail, .. } => format!("invalid request body: {detail}"),
            Self::Review(err) => err.to_string(),
        }
    }
}

fn completion_status(err: &CompletionError) -> StatusCode {
    match err {
        CompletionError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        CompletionError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        CompletionError::Unauthorized { .. }
        | CompletionError::Upstream { .. }
        | CompletionError::Transport(_)
        | CompletionError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let retry_after_secs = self.retry_after_secs();
        let body = ErrorBody {
            error: self.message(),
            retry_after_secs,
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after_secs
            && let Ok(value) = HeaderValue::from_str(&secs.to_string())
        {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: CompletionError) -> StatusCode {
        ApiError::from(ReviewError::from(err)).status()
    }

    #[test]
    fn completion_failures_map_to_gateway_statuses() {
        assert_eq!(
            status_of(CompletionError::RateLimited {
                retry_after_secs: None
            }),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(status_of(CompletionError::Timeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            status_of(CompletionError::Unauthorized { status: 401 }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(CompletionError::Transport("reset".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn rate_limit_response_sets_retry_after_header() {
        let response = ApiError::from(ReviewError::from(CompletionError::RateLimited {
            retry_after_secs: Some(9),
        }))
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "9");
    }

    #[test]
    fn empty_code_is_bad_request_without_retry_hint() {
        let response = ApiError::from(ReviewError::EmptyCode).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::RETRY_AFTER).is_none());
    }
}
