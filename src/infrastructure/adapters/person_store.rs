//! 명단 저장소 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::PersonStore;
use crate::domain::person::Person;
use crate::domain::record::LoadOutcome;
use crate::infrastructure::persistence;

/// 로컬 JSON 파일 기반 명단 저장소.
pub struct JsonFilePersonStore;

impl PersonStore for JsonFilePersonStore {
    fn save(&self, path: &Path, people: &[Person]) -> Result<()> {
        persistence::save_people(path, people)
    }

    fn load(&self, path: &Path) -> Result<LoadOutcome> {
        persistence::load_people(path)
    }
}
