//! 유스케이스 단위 테스트용 포트 대역(fake) 구현.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow, bail};

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, FieldPrompter, PersonStore, Reporter};
use crate::domain::person::{Person, parse_birth_date};
use crate::domain::record::LoadOutcome;

pub fn person(name: &str, date: &str, sign: &str) -> Person {
    Person {
        name: name.to_string(),
        surname: format!("{name}ov"),
        date_of_birth: parse_birth_date(date).unwrap(),
        zodiac_sign: sign.to_string(),
    }
}

/// 출력 줄을 모아두는 리포터. 복제본끼리 기록을 공유한다.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    out: Arc<Mutex<Vec<String>>>,
    err: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn out_lines(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    pub fn err_lines(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn raw(&self, line: &str) {
        self.out.lock().unwrap().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.err.lock().unwrap().push(line.to_string());
    }
}

/// 미리 정한 답변을 순서대로 돌려주는 입력기.
#[derive(Clone)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.iter().map(|a| a.to_string()).collect())),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl FieldPrompter for ScriptedPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        self.asked.lock().unwrap().push(label.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("input closed while reading {label}"))
    }
}

/// 메모리 상에서 저장/로딩 결과를 흉내 내는 저장소.
#[derive(Clone, Default)]
pub struct MemoryStore {
    outcome: Option<LoadOutcome>,
    saved: Arc<Mutex<Vec<(PathBuf, Vec<Person>)>>>,
}

impl MemoryStore {
    pub fn with_outcome(outcome: LoadOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            saved: Arc::default(),
        }
    }

    pub fn saved(&self) -> Vec<(PathBuf, Vec<Person>)> {
        self.saved.lock().unwrap().clone()
    }
}

impl PersonStore for MemoryStore {
    fn save(&self, path: &Path, people: &[Person]) -> Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((path.to_path_buf(), people.to_vec()));
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<LoadOutcome> {
        match &self.outcome {
            Some(outcome) => Ok(outcome.clone()),
            None => bail!("failed to read roster file {}", path.display()),
        }
    }
}

#[derive(Default)]
pub struct FixedConfigRepository {
    pub config: Config,
}

impl ConfigRepository for FixedConfigRepository {
    fn load(&self) -> Result<Config> {
        Ok(self.config.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}
