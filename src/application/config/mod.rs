//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = ">>> ";
pub const ROSTER_FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// 명단 파일 기준 디렉터리(미지정 시 작업 디렉터리)
    pub data_dir: Option<String>,
    /// REPL 입력 프롬프트
    pub prompt: Option<String>,
    /// 시작 시 자동으로 불러올 명단 파일 이름(확장자 제외)
    pub autoload: Option<String>,
}

impl Config {
    pub fn prompt(&self) -> String {
        self.defaults
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    /// 사용자가 입력한 파일 이름에 `.json`을 붙이고 `data_dir` 기준 경로로 변환한다.
    pub fn roster_path(&self, basename: &str) -> PathBuf {
        let file_name = format!("{basename}.{ROSTER_FILE_EXTENSION}");
        match &self.defaults.data_dir {
            Some(dir) => Path::new(dir).join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// 우선순위가 높은 설정 값으로 덮어쓴다(지정된 필드만).
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.autoload.is_some() {
            self.autoload = other.autoload;
        }
    }
}
