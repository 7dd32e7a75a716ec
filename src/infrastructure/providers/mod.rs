//! 외부 언어 모델 provider 공통 모듈.
//! HTTP 호출/오류 분류를 공유하고 provider별 요청 형식을 구현한다.

mod api_runner;
pub mod groq;

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::CompletionClient;
use crate::infrastructure::config::Config;

pub use groq::GroqClient;

/// 설정에서 공유 completion 클라이언트를 구성한다.
pub fn build_completion_client(config: &Config) -> Result<Arc<dyn CompletionClient>> {
    Ok(Arc::new(GroqClient::from_config(config)?))
}
