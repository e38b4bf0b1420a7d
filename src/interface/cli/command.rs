//! CLI 실행 인자 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "zodiac-roster")]
#[command(about = "Interactive roster of people, their birth dates and zodiac signs")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load <BASENAME>.json before starting the shell
    #[arg(long, value_name = "BASENAME")]
    load: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config
    Config,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive { preload: Option<String> },
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Some(Commands::Config) => {
                if self.load.is_some() {
                    return Err("--load cannot be combined with `config`".to_string());
                }
                Ok(CliAction::InspectConfig)
            }
            None => Ok(CliAction::Interactive { preload: self.load }),
        }
    }
}
