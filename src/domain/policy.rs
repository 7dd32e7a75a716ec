//! 도메인 정책(프롬프트 구성, 모델 응답 판정 규칙).

use crate::domain::review::{CompletionRequest, ReviewRequest, ReviewResult, ReviewSettings};

/// 오류가 없을 때 모델이 그대로 돌려주도록 지시하는 토큰.
pub const NO_ERRORS_SENTINEL: &str = "NO_ERRORS_FOUND";
/// 오류 없음 판정 시 호출자에게 돌려주는 고정 메시지.
pub const NO_ERRORS_MESSAGE: &str = "No Errors Found ✅";

/// 리뷰 지시 템플릿에 언어/코드를 그대로 삽입한다(escape 없음).
pub fn build_review_prompt(code: &str, language: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("You are a professional senior software engineer.\n\n");
    out.push_str(&format!("Analyze the following {} code.\n\n", language));
    out.push_str("STRICT RULES:\n\n");
    out.push_str("1. If there are syntax or logical errors:\n");
    out.push_str("   - List all detected errors clearly.\n");
    out.push_str("   - Provide corrected full code.\n\n");
    out.push_str("2. If the code has NO errors:\n");
    out.push_str("   - Respond EXACTLY with:\n");
    out.push_str(&format!("   {}\n\n", NO_ERRORS_SENTINEL));
    out.push_str("Code:\n");
    out.push_str(code);
    out.push('\n');
    out
}

/// 요청과 호출 정책으로 completion 요청을 만든다.
pub fn build_completion_request(
    request: &ReviewRequest,
    settings: &ReviewSettings,
) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        prompt: build_review_prompt(&request.code, &request.language),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}

/// 모델 원문을 판정한다.
/// sentinel이 부분 문자열로만 있어도 NoErrors로 분류된다.
pub fn classify_verdict(raw: &str) -> ReviewResult {
    if raw.contains(NO_ERRORS_SENTINEL) {
        return ReviewResult::NoErrors {
            message: NO_ERRORS_MESSAGE.to_string(),
        };
    }

    ReviewResult::ErrorsFound {
        analysis: raw.to_string(),
    }
}
