//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::application::errors::CompletionError;
use crate::domain::review::{CompletionRequest, ProviderResponse};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 언어 모델의 단일 completion 호출 포트.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 프롬프트 1건을 보내고 전체 응답을 기다린다(스트리밍 없음).
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<ProviderResponse, CompletionError>;
}

/// 설정으로부터 공유 completion 클라이언트를 만드는 팩토리 포트.
pub trait CompletionFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Arc<dyn CompletionClient>>;
}
