//! Axum 기반 HTTP 인터페이스.
//!
//! - `GET /` 정적 리뷰 페이지
//! - `GET /health` 상태 확인
//! - `POST /review` 코드 리뷰 요청
//!
//! 본문 크기 제한은 `DefaultBodyLimit`로 추출기 단계에서 적용해 초과 시에도 JSON 오류 형식을 유지한다.
//! 요청 타임아웃은 tower-http 레이어로 적용한다.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::ports::CompletionClient;
use crate::domain::review::ReviewSettings;

pub use error::ApiError;
pub use handlers::{ReviewBody, ReviewPayload};

/// 요청 간 공유되는 읽기 전용 상태.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub settings: Arc<ReviewSettings>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, settings: ReviewSettings) -> Self {
        Self {
            completion,
            settings: Arc::new(settings),
        }
    }
}

/// 서버 레이어 설정.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
}

pub fn build_router(state: AppState, limits: HttpLimits) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(handlers::handle_health))
        .route("/review", post(handlers::handle_review))
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// 주소에 바인딩하고 Ctrl-C까지 요청을 처리한다.
pub async fn serve(host: &str, port: u16, router: Router) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    tracing::info!(%local, "codecheck listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server terminated")?;

    tracing::info!("codecheck stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
