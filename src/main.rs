//! `zodiac-roster` 바이너리 진입점.

use zodiac_roster::interface::cli::{AppComposition, Cli, CliAction, start_session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => {
            if let Err(err) = composition.inspect_config_usecase().execute() {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
        CliAction::Interactive { preload } => {
            if let Err(err) = start_session(&composition, preload) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
