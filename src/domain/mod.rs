//! Domain layer
//! 리뷰 규칙(요청/결과 값 객체, 프롬프트, 판정 정책)을 외부 의존성 없이 표현한다.

pub mod policy;
pub mod review;
