//! 명단 대화형 쉘(REPL) 인터페이스.

use std::io::{self, IsTerminal};

use anyhow::Result;
use crossterm::style::Stylize;
use tracing::debug;

use crate::application::config::Config;
use crate::domain::roster::{BirthMonth, Roster};
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::{ReplInput, StdinInput};

pub const HELP_LINES: [&str; 10] = [
    "Commands:",
    "",
    "add - add a person;",
    "list - print the list of people;",
    "select <month> - show people born in the given month (1-12);",
    "help - show this help;",
    "load <name> - load people from <name>.json;",
    "save <name> - save people to <name>.json;",
    "config - show effective settings;",
    "exit - quit the program.",
];

/// 설정을 읽고 초기 명단을 준비한 뒤 stdin 기반 REPL을 실행한다.
pub fn start_session(composition: &AppComposition, preload: Option<String>) -> Result<()> {
    let config = composition.load_config()?;
    let roster = initial_roster(composition, &config, preload)?;

    print_welcome();
    run_repl(composition, &config, roster, &mut StdinInput)?;
    Ok(())
}

/// `--load`로 지정한 파일은 실패 시 시작을 중단하고,
/// 설정의 `autoload`는 실패해도 빈 명단으로 시작한다.
fn initial_roster(
    composition: &AppComposition,
    config: &Config,
    preload: Option<String>,
) -> Result<Roster> {
    if let Some(basename) = preload {
        return composition.load_people_usecase().execute(&config.roster_path(&basename));
    }

    let Some(basename) = &config.defaults.autoload else {
        return Ok(Roster::new());
    };
    match composition.load_people_usecase().execute(&config.roster_path(basename)) {
        Ok(roster) => Ok(roster),
        Err(err) => {
            composition.reporter().error(&format!("error: autoload skipped: {err:#}"));
            Ok(Roster::new())
        }
    }
}

/// `exit` 또는 입력 종료까지 명령을 처리하고 최종 명단을 반환한다.
/// 명령 단위 오류는 stderr로 보고하고 다음 입력을 계속 받는다.
pub fn run_repl(
    composition: &AppComposition,
    config: &Config,
    mut roster: Roster,
    input: &mut dyn ReplInput,
) -> Result<Roster> {
    let prompt = config.prompt();

    loop {
        let Some(raw_input) = input.read_command(&prompt)? else {
            println!();
            break;
        };
        let line = raw_input.trim();
        if line.is_empty() {
            continue;
        }

        match parse_repl_command(line) {
            Ok(ReplCommand::Exit) => break,
            Ok(cmd) => {
                if let Err(err) = execute_command(composition, config, &mut roster, cmd) {
                    composition.reporter().error(&format!("error: {err:#}"));
                }
            }
            Err(msg) => composition.reporter().error(&format!("error: {msg}")),
        }
    }

    Ok(roster)
}

#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Add,
    List,
    Select(BirthMonth),
    Help,
    Save(String),
    Load(String),
    InspectConfig,
}

fn execute_command(
    composition: &AppComposition,
    config: &Config,
    roster: &mut Roster,
    command: ReplCommand,
) -> Result<()> {
    match command {
        ReplCommand::Exit => Ok(()),
        ReplCommand::Add => composition.add_person_usecase().execute(roster),
        ReplCommand::List => {
            composition.list_people_usecase().execute(roster);
            Ok(())
        }
        ReplCommand::Select(month) => {
            composition.select_people_usecase().execute(roster, month);
            Ok(())
        }
        ReplCommand::Help => {
            for line in HELP_LINES {
                composition.reporter().raw(line);
            }
            Ok(())
        }
        ReplCommand::Save(basename) => composition
            .save_people_usecase()
            .execute(&config.roster_path(&basename), roster),
        ReplCommand::Load(basename) => {
            // 저장하지 않은 변경이 있어도 확인 없이 교체한다.
            *roster = composition.load_people_usecase().execute(&config.roster_path(&basename))?;
            debug!(size = roster.len(), "roster replaced");
            Ok(())
        }
        ReplCommand::InspectConfig => composition.inspect_config_usecase().execute(),
    }
}

/// 명령어(첫 토큰)만 대소문자를 구분하지 않고, 인자는 입력 그대로 유지한다.
fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    let (verb, args) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };
    let verb = verb.to_lowercase();

    match (verb.as_str(), args.is_empty()) {
        ("exit", true) => Ok(ReplCommand::Exit),
        ("add", true) => Ok(ReplCommand::Add),
        ("list", true) => Ok(ReplCommand::List),
        ("help", true) => Ok(ReplCommand::Help),
        ("config", true) => Ok(ReplCommand::InspectConfig),
        ("select", false) => BirthMonth::parse(args)
            .map(ReplCommand::Select)
            .map_err(|err| err.to_string()),
        ("select", true) => Err("usage: select <month>".to_string()),
        ("save", false) => Ok(ReplCommand::Save(args.to_string())),
        ("save", true) => Err("usage: save <basename>".to_string()),
        ("load", false) => Ok(ReplCommand::Load(args.to_string())),
        ("load", true) => Err("usage: load <basename>".to_string()),
        _ => Err(format!("unknown command: {}", input.to_lowercase())),
    }
}

fn print_welcome() {
    if !io::stdout().is_terminal() {
        return;
    }

    println!("{}", "zodiac-roster interactive shell".bold().cyan());
    println!("{}", "type `help` to list commands, `exit` to quit".dim());
}
