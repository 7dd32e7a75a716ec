//! 코드 스니펫 리뷰 유스케이스.

use std::time::Instant;

use crate::application::errors::ReviewError;
use crate::application::ports::CompletionClient;
use crate::domain::policy::{build_completion_request, classify_verdict};
use crate::domain::review::{ReviewRequest, ReviewResult, ReviewSettings};

/// 입력 검증, completion 1회 호출, 응답 판정을 조율한다.
pub struct ReviewCodeUseCase<'a> {
    pub completion: &'a dyn CompletionClient,
    pub settings: &'a ReviewSettings,
}

impl<'a> ReviewCodeUseCase<'a> {
    /// 빈 코드는 외부 호출 없이 즉시 거부한다.
    pub async fn execute(&self, request: ReviewRequest) -> Result<ReviewResult, ReviewError> {
        if request.is_blank() {
            tracing::debug!("rejecting review request with empty code");
            return Err(ReviewError::EmptyCode);
        }

        tracing::info!(
            language = %request.language,
            code_bytes = request.code.len(),
            provider = self.completion.name(),
            model = %self.settings.model,
            "review requested"
        );

        let completion_request = build_completion_request(&request, self.settings);
        let started = Instant::now();
        let response = match self.completion.complete(&completion_request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    provider = self.completion.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "completion call failed"
                );
                return Err(err.into());
            }
        };

        let result = classify_verdict(&response.content);
        tracing::info!(
            provider = self.completion.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            usage = %response.usage.summary(),
            errors_found = result.errors_found(),
            "review completed"
        );

        Ok(result)
    }
}
