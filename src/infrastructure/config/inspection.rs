//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::{ProviderCredentialResolution, resolve_provider_api_key};
use crate::application::config::{Config, ProviderConfig, ServerConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub server: ServerConfig,
    pub effective_server: EffectiveServer,
    pub provider: ProviderInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveServer {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub request_timeout_secs: u64,
}

/// 인증 키 값은 포함하지 않고 출처만 노출한다.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInspection {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub api_key_env: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let credential = resolve_provider_api_key(&loaded.config.provider);
        Self::from_parts(loaded, credential)
    }

    fn from_parts(loaded: LoadedConfig, credential: ProviderCredentialResolution) -> Self {
        let config = &loaded.config;
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            server: config.server.clone(),
            effective_server: EffectiveServer {
                host: config.host(),
                port: config.port(),
                max_body_bytes: config.max_body_bytes(),
                request_timeout_secs: config.request_timeout_secs(),
            },
            provider: ProviderInspection::from_config(config, &config.provider, credential),
        }
    }
}

impl ProviderInspection {
    fn from_config(
        config: &Config,
        cfg: &ProviderConfig,
        credential: ProviderCredentialResolution,
    ) -> Self {
        let settings = config.review_settings();
        Self {
            api_base: cfg.api_base(),
            model: settings.model,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            timeout_secs: cfg.timeout_secs(),
            api_key_env: cfg.api_key_env(),
            api_key_source: credential.source,
            api_key_resolved: credential.credential.is_some(),
        }
    }
}
