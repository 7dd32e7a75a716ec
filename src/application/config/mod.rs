//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::review::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ReviewSettings,
};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
/// 요청 본문 최대 크기(64KB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 65_536;
/// 서버 요청 타임아웃. provider 타임아웃보다 길어야 provider 오류가 그대로 전달된다.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 150;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// completion provider 설정
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// 요청 본문 최대 바이트
    pub max_body_bytes: Option<usize>,
    /// 요청 전체 타임아웃(초)
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// OpenAI 호환 API 베이스 URL
    pub api_base: Option<String>,
    /// 모델 식별자
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// provider HTTP 호출 타임아웃(초)
    pub timeout_secs: Option<u64>,
    /// 인증 키(직접값, 권장하지 않음)
    pub api_key: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
}

impl Config {
    pub fn host(&self) -> String {
        self.server
            .host
            .clone()
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.server.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.server
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// completion 호출 정책(모델/temperature/max_tokens)을 해석한다.
    pub fn review_settings(&self) -> ReviewSettings {
        ReviewSettings {
            model: self
                .provider
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.provider.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.provider.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.server.merge_from(other.server);
        self.provider.merge_from(other.provider);
    }
}

impl ServerConfig {
    pub fn merge_from(&mut self, other: ServerConfig) {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.max_body_bytes.is_some() {
            self.max_body_bytes = other.max_body_bytes;
        }
        if other.request_timeout_secs.is_some() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
    }
}

impl ProviderConfig {
    pub fn api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn api_key_env(&self) -> String {
        self.api_key_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
            .to_string()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS)
    }

    pub fn merge_from(&mut self, other: ProviderConfig) {
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
    }
}
