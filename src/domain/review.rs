//! 리뷰 도메인 엔티티/값 객체.

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// 호출자가 보낸 리뷰 요청. 요청 단위로 생성되고 응답 후 폐기된다.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub code: String,
    /// 자유 텍스트 언어 라벨(검증하지 않음)
    pub language: String,
}

impl ReviewRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }

    /// 공백 제거 후 코드가 비어 있는지 확인한다.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}

/// 리뷰 결과. 항상 두 변형 중 정확히 하나다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewResult {
    NoErrors { message: String },
    ErrorsFound { analysis: String },
}

impl ReviewResult {
    pub fn errors_found(&self) -> bool {
        matches!(self, Self::ErrorsFound { .. })
    }
}

/// 완성(completion) 호출 파라미터 정책.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// 외부 모델로 보내는 단일 user 메시지 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    /// 로그 출력용 요약 문자열.
    pub fn summary(&self) -> String {
        let fmt = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
        format!(
            "prompt={} completion={} total={}",
            fmt(self.prompt_tokens),
            fmt(self.completion_tokens),
            fmt(self.total_tokens)
        )
    }
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_code_is_blank() {
        assert!(ReviewRequest::new("", "rust").is_blank());
        assert!(ReviewRequest::new("  \n\t ", "rust").is_blank());
        assert!(!ReviewRequest::new(" x ", "").is_blank());
    }

    #[test]
    fn default_settings_are_deterministic() {
        let settings = ReviewSettings::default();
        assert_eq!(settings.model, "llama-3.3-70b-versatile");
        assert_eq!(settings.temperature, 0.0);
        assert_eq!(settings.max_tokens, 2000);
    }

    #[test]
    fn usage_summary_marks_missing_values() {
        let usage = TokenUsage {
            prompt_tokens: Some(12),
            completion_tokens: None,
            total_tokens: Some(20),
        };
        assert_eq!(usage.summary(), "prompt=12 completion=- total=20");
    }
}
