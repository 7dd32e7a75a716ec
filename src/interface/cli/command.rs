//! CLI 명령 파싱 모듈.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "codecheck")]
#[command(about = "LLM-backed code snippet review service")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP review service (default)
    Serve(ServeArgs),
    /// Show effective merged config and API key source
    Config,
}

#[derive(Debug, Args, Default)]
struct ServeArgs {
    /// Listen address (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides server.port)
    #[arg(long, short)]
    port: Option<u16>,
}

/// `serve` 명령의 바인딩 주소 override.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub enum CliAction {
    InspectConfig,
    Serve(ServeOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            Some(Commands::Serve(args)) => CliAction::Serve(args.into()),
            None => CliAction::Serve(ServeOptions::default()),
        }
    }
}

impl From<ServeArgs> for ServeOptions {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}
