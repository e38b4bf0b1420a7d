//! REPL 입력 처리기.
//! 명령 줄과 `add` 필드 입력이 같은 stdin을 공유하므로 줄 단위로만 읽는다.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// REPL 명령 줄 공급원.
pub trait ReplInput {
    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 `None`을 반환한다.
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// 표준 입력에서 읽는 기본 공급원.
/// lock을 잡아두지 않고 호출마다 읽어 필드 입력기와 충돌하지 않는다.
pub struct StdinInput;

impl ReplInput for StdinInput {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>> {
        print_prompt(prompt)?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

/// 임의의 `BufRead`(스크립트 파일, 테스트 입력 등)에서 읽는 공급원.
pub struct BufReadInput<R>(pub R);

impl<R: BufRead> ReplInput for BufReadInput<R> {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>> {
        print_prompt(prompt)?;

        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

fn print_prompt(prompt: &str) -> Result<()> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(())
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
