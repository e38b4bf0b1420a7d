//! 통합 테스트 공용 포트 대역.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use zodiac_roster::application::config::Config;
use zodiac_roster::application::ports::{ConfigRepository, FieldPrompter, Reporter};

#[derive(Clone, Default)]
pub struct Recorder {
    out: Arc<Mutex<Vec<String>>>,
    err: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn out(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    pub fn err(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Reporter for Recorder {
    fn raw(&self, line: &str) {
        self.out.lock().unwrap().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.err.lock().unwrap().push(line.to_string());
    }
}

pub struct Answers(Mutex<VecDeque<String>>);

impl Answers {
    pub fn new(answers: &[&str]) -> Self {
        Self(Mutex::new(answers.iter().map(|a| a.to_string()).collect()))
    }
}

impl FieldPrompter for Answers {
    fn ask(&self, label: &str) -> Result<String> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("no answer left for {label}"))
    }
}

pub struct StaticConfig(pub Config);

impl ConfigRepository for StaticConfig {
    fn load(&self) -> Result<Config> {
        Ok(self.0.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

/// 임시 디렉터리를 `data_dir`로 쓰는 설정.
pub fn config_in(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.defaults.data_dir = Some(dir.display().to_string());
    config
}
