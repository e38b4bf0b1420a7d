//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crossterm::style::Stylize;

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    colored_errors: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 오류 출력에 색을 입힌다.
    pub fn new() -> Self {
        Self {
            colored_errors: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn raw(&self, line: &str) {
        println!("{}", line);
    }

    fn error(&self, line: &str) {
        if self.colored_errors {
            eprintln!("{}", line.red());
        } else {
            eprintln!("{}", line);
        }
    }
}
