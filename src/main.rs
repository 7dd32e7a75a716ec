//! `codecheck` 바이너리 진입점.

use codecheck::interface::cli::{Cli, CliAction};
use codecheck::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    // 로컬 .env의 API key를 환경변수로 먼저 올려둔다(없으면 무시).
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let composition = AppComposition::default();

    match Cli::parse_action() {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Serve(options) => {
            if let Err(err) = composition.serve(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
