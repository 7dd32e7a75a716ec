//! Interface layer
//! CLI 진입점, HTTP 서버, 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
pub mod http;
