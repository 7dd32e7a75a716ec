//! Axum 핸들러와 요청/응답 본문 형식.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, Json};
use serde::{Deserialize, Serialize};

use crate::application::usecases::review_code::ReviewCodeUseCase;
use crate::domain::review::{ReviewRequest, ReviewResult};

use super::AppState;
use super::error::ApiError;

const INDEX_HTML: &str = include_str!("static/index.html");

#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    pub code: String,
    pub language: String,
}

/// `/review` 성공 응답. 두 형태 중 하나만 직렬화된다.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReviewBody {
    Clean { errors_found: bool, message: String },
    Findings { errors_found: bool, analysis: String },
}

impl From<ReviewResult> for ReviewBody {
    fn from(result: ReviewResult) -> Self {
        match result {
            ReviewResult::NoErrors { message } => Self::Clean {
                errors_found: false,
                message,
            },
            ReviewResult::ErrorsFound { analysis } => Self::Findings {
                errors_found: true,
                analysis,
            },
        }
    }
}

/// GET / — 정적 리뷰 페이지
pub(super) async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "provider": state.completion.name(),
        "model": state.settings.model,
    }))
}

/// POST /review
pub(super) async fn handle_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewPayload>, JsonRejection>,
) -> Result<Json<ReviewBody>, ApiError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected review body");
    })?;

    let use_case = ReviewCodeUseCase {
        completion: state.completion.as_ref(),
        settings: &state.settings,
    };
    let result = use_case
        .execute(ReviewRequest::new(payload.code, payload.language))
        .await?;

    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_result_serializes_to_message_shape() {
        let body = ReviewBody::from(ReviewResult::NoErrors {
            message: "No Errors Found ✅".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "errors_found": false, "message": "No Errors Found ✅" })
        );
    }

    #[test]
    fn findings_serialize_to_analysis_shape() {
        let body = ReviewBody::from(ReviewResult::ErrorsFound {
            analysis: "Error: x".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "errors_found": true, "analysis": "Error: x" })
        );
    }

    #[test]
    fn payload_requires_both_fields() {
        assert!(serde_json::from_str::<ReviewPayload>(r#"{"code":"x","language":"c"}"#).is_ok());
        assert!(serde_json::from_str::<ReviewPayload>(r#"{"code":"x"}"#).is_err());
    }
}
