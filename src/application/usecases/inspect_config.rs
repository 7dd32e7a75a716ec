//! 병합된 서버/provider 설정을 진단 출력하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

/// `codecheck config` 명령이 사용하는 설정 점검 유스케이스.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 탐색 경로, 적용값, 인증 키 출처를 담은 JSON 문자열을 생성한다.
    pub fn execute(&self) -> Result<String> {
        self.config_repo
            .inspect_pretty_json()
            .context("failed to inspect codecheck config")
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::application::config::Config;

    struct StaticRepo {
        broken: bool,
    }

    impl ConfigRepository for StaticRepo {
        fn load(&self) -> Result<Config> {
            Ok(Config::default())
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            if self.broken {
                bail!("bad json");
            }
            Ok("{\"ok\": true}".to_string())
        }
    }

    #[test]
    fn returns_repository_json() {
        let repo = StaticRepo { broken: false };
        let out = InspectConfigUseCase { config_repo: &repo }.execute().unwrap();
        assert_eq!(out, "{\"ok\": true}");
    }

    #[test]
    fn wraps_repository_errors_with_context() {
        let repo = StaticRepo { broken: true };
        let err = InspectConfigUseCase { config_repo: &repo }
            .execute()
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to inspect codecheck config");
        assert_eq!(format!("{err:#}"), "failed to inspect codecheck config: bad json");
    }
}
