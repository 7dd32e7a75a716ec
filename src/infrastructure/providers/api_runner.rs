//! Provider HTTP API 호출 공용 유틸리티.

use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::application::errors::CompletionError;

/// 오류 본문은 로그/응답에 그대로 싣지 않도록 잘라낸다.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Provider API 호출용 공유 HTTP 클라이언트를 생성한다.
/// 타임아웃 없는 기본 클라이언트로 폴백하지 않고 기동 오류로 올린다.
pub fn build_api_client(timeout: Duration) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build provider HTTP client")
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 분류한다.
pub async fn send_json(request: RequestBuilder) -> Result<Value, CompletionError> {
    let response = request.send().await.map_err(classify_transport_error)?;

    let status = response.status();
    let retry_after_secs = parse_retry_after(response.headers());
    let body = response.text().await.map_err(classify_transport_error)?;

    if !status.is_success() {
        return Err(classify_status(status, retry_after_secs, &body));
    }

    serde_json::from_str(&body)
        .map_err(|err| CompletionError::MalformedResponse(format!("invalid JSON: {err}")))
}

fn classify_transport_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        return CompletionError::Timeout;
    }
    CompletionError::Transport(err.to_string())
}

fn classify_status(
    status: StatusCode,
    retry_after_secs: Option<u64>,
    body: &str,
) -> CompletionError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited { retry_after_secs },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Unauthorized {
            status: status.as_u16(),
        },
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => CompletionError::Timeout,
        _ => CompletionError::Upstream {
            status: status.as_u16(),
            body: truncate(body.trim(), MAX_ERROR_BODY_CHARS),
        },
    }
}

/// 초 단위 `Retry-After`만 해석한다(HTTP-date 형식은 무시).
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| secs.ceil() as u64)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn api_client_builds_with_configured_timeout() {
        assert!(build_api_client(Duration::from_millis(250)).is_ok());
    }

    #[test]
    fn retry_after_accepts_integer_and_fractional_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("12"));
        assert_eq!(parse_retry_after(&headers), Some(12));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("1.2"));
        assert_eq!(parse_retry_after(&headers), Some(2));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, Some(3), ""),
            CompletionError::RateLimited {
                retry_after_secs: Some(3)
            }
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, None, ""),
            CompletionError::Unauthorized { status: 403 }
        ));
        assert!(matches!(
            classify_status(StatusCode::GATEWAY_TIMEOUT, None, ""),
            CompletionError::Timeout
        ));
        match classify_status(StatusCode::INTERNAL_SERVER_ERROR, None, " boom ") {
            CompletionError::Upstream { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn long_error_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(600);
        let out = truncate(&body, 512);
        assert_eq!(out.chars().count(), 515);
        assert!(out.ends_with("..."));
        assert_eq!(truncate("short", 512), "short");
    }
}
