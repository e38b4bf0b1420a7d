//! 필드 입력 포트 구현 어댑터.

use std::io::{self, Write};

use anyhow::{Result, bail};

use crate::application::ports::FieldPrompter;

/// stdin에서 한 줄씩 필드 값을 읽는 어댑터.
pub struct StdinPrompter;

impl FieldPrompter for StdinPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("input closed while reading {label}");
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}
