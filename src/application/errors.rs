//! 유스케이스 호출자가 분기해야 하는 오류 분류.

use thiserror::Error;

/// 외부 completion 호출 실패 분류.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,
    #[error("completion provider rate limit exceeded")]
    RateLimited { retry_after_secs: Option<u64> },
    #[error("completion provider rejected the credentials ({status})")]
    Unauthorized { status: u16 },
    #[error("completion provider returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to reach completion provider: {0}")]
    Transport(String),
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// 호출자에게 전달할 재시도 힌트(초).
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_secs } => *retry_after_secs,
            Self::Timeout => Some(DEFAULT_TIMEOUT_RETRY_SECS),
            _ => None,
        }
    }
}

const DEFAULT_TIMEOUT_RETRY_SECS: u64 = 5;

/// 리뷰 유스케이스 실패.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Code cannot be empty")]
    EmptyCode,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
