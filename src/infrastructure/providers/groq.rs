//! Groq(OpenAI 호환 chat completions) provider 어댑터.

use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::application::errors::CompletionError;
use crate::application::ports::CompletionClient;
use crate::domain::review::{CompletionRequest, ProviderResponse, TokenUsage};
use crate::infrastructure::config::{Config, resolve_provider_api_key};

use super::api_runner::{build_api_client, send_json};

pub struct GroqClient {
    client: Client,
    base_url: String,
    credential: String,
}

impl GroqClient {
    pub fn new(
        base_url: impl Into<String>,
        credential: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_api_client(timeout)?,
            base_url: base_url.into(),
            credential: credential.into(),
        })
    }

    /// 설정에서 API key를 해석해 클라이언트를 만든다. 키가 없으면 기동을 거부한다.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = &config.provider;
        let resolution = resolve_provider_api_key(provider);
        let Some(credential) = resolution.credential else {
            bail!(
                "no API key configured for Groq: set {} (or provider.api_key in config)",
                provider.api_key_env()
            );
        };

        tracing::info!(
            api_base = %provider.api_base(),
            key_source = resolution.source.as_deref().unwrap_or("unknown"),
            "groq client configured"
        );

        Self::new(
            provider.api_base(),
            credential,
            Duration::from_secs(provider.timeout_secs()),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    fn name(&self) -> &'static str {
        "Groq"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<ProviderResponse, CompletionError> {
        let payload = json!({
            "model": request.model,
            "messages": [
                { "role": "user", "content": request.prompt }
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let http_request = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.credential)
            .json(&payload);

        let response = send_json(http_request).await?;
        let content = extract_message_content(&response).ok_or_else(|| {
            CompletionError::MalformedResponse("missing choices[0].message.content".to_string())
        })?;
        if content.trim().is_empty() {
            return Err(CompletionError::MalformedResponse(
                "empty response content".to_string(),
            ));
        }

        Ok(ProviderResponse {
            content,
            usage: extract_usage(&response),
        })
    }
}

fn extract_message_content(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn extract_usage(response: &Value) -> TokenUsage {
    let field = |name: &str| {
        response
            .pointer(&format!("/usage/{name}"))
            .and_then(Value::as_u64)
    };
    let prompt_tokens = field("prompt_tokens");
    let completion_tokens = field("completion_tokens");
    let total_tokens = field("total_tokens").or(match (prompt_tokens, completion_tokens) {
        (Some(p), Some(c)) => Some(p + c),
        _ => None,
    });

    TokenUsage {
        prompt_tokens,
        completion_tokens,
        total_tokens,
    }
}
