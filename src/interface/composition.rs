//! 애플리케이션 조립(composition root) 모듈.

use anyhow::{Context, Result, bail};

use crate::application::ports::{CompletionFactory, ConfigRepository};
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{CompletionFactoryAdapter, JsonConfigRepository};
use crate::interface::cli::ServeOptions;
use crate::interface::http::{self, AppState, HttpLimits};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: Box<dyn ConfigRepository>,
    completion_factory: Box<dyn CompletionFactory>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(Box::new(JsonConfigRepository), Box::new(CompletionFactoryAdapter))
    }
}

impl AppComposition {
    /// 설정 저장소/클라이언트 팩토리를 외부에서 주입한다.
    pub fn new(
        config_repo: Box<dyn ConfigRepository>,
        completion_factory: Box<dyn CompletionFactory>,
    ) -> Self {
        Self {
            config_repo,
            completion_factory,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: self.config_repo.as_ref(),
        }
    }

    /// 설정을 로딩해 라우터와 바인딩 주소를 구성한다.
    pub fn build_server(&self, options: &ServeOptions) -> Result<ServerPlan> {
        let config = self
            .config_repo
            .load()
            .context("failed to load codecheck config")?;

        // provider 타임아웃이 먼저 끝나야 504 JSON 응답이 서버 408보다 앞선다.
        let provider_timeout = config.provider.timeout_secs();
        let request_timeout = config.request_timeout_secs();
        if provider_timeout >= request_timeout {
            bail!(
                "provider.timeout_secs ({provider_timeout}) must be shorter than server.request_timeout_secs ({request_timeout})"
            );
        }

        let completion = self
            .completion_factory
            .build(&config)
            .context("failed to configure completion provider")?;

        let settings = config.review_settings();
        tracing::info!(
            provider = completion.name(),
            model = %settings.model,
            max_tokens = settings.max_tokens,
            "review settings resolved"
        );

        let limits = HttpLimits {
            max_body_bytes: config.max_body_bytes(),
            request_timeout: std::time::Duration::from_secs(config.request_timeout_secs()),
        };
        let router = http::build_router(AppState::new(completion, settings), limits);

        Ok(ServerPlan {
            host: options.host.clone().unwrap_or_else(|| config.host()),
            port: options.port.unwrap_or_else(|| config.port()),
            router,
        })
    }

    /// HTTP 서버를 기동하고 종료 신호까지 대기한다.
    pub async fn serve(&self, options: ServeOptions) -> Result<()> {
        let plan = self.build_server(&options)?;
        http::serve(&plan.host, plan.port, plan.router).await
    }
}

/// 기동 직전의 서버 구성.
pub struct ServerPlan {
    pub host: String,
    pub port: u16,
    pub router: axum::Router,
}
