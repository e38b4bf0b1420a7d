//! 명단을 JSON 파일로 저장하는 유스케이스.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::application::ports::PersonStore;
use crate::domain::roster::Roster;

pub struct SavePeopleUseCase<'a> {
    pub store: &'a dyn PersonStore,
}

impl<'a> SavePeopleUseCase<'a> {
    /// 대상 파일을 무조건 덮어쓴다. 명단은 변경하지 않는다.
    pub fn execute(&self, path: &Path, roster: &Roster) -> Result<()> {
        self.store.save(path, roster.people())?;
        info!(path = %path.display(), count = roster.len(), "roster saved");
        Ok(())
    }
}
