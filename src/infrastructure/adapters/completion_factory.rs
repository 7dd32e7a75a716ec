//! Completion 클라이언트 포트 구현 어댑터.

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::{CompletionClient, CompletionFactory};
use crate::infrastructure::config::Config;
use crate::infrastructure::providers;

/// 설정에 맞는 provider 클라이언트를 생성하는 팩토리 어댑터.
pub struct CompletionFactoryAdapter;

impl CompletionFactory for CompletionFactoryAdapter {
    fn build(&self, config: &Config) -> Result<Arc<dyn CompletionClient>> {
        providers::build_completion_client(config)
    }
}
