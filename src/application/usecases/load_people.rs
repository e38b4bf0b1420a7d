//! JSON 파일에서 명단을 불러오는 유스케이스.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::application::ports::{PersonStore, Reporter};
use crate::domain::record::{SkipReason, SkippedRecord};
use crate::domain::roster::Roster;

/// 파일을 읽어 새 명단을 만든다.
/// 레코드 단위 오류는 건너뛰며 건마다 진단을 한 번 출력하고,
/// 파일 단위 오류는 부분 명단 없이 그대로 반환한다.
pub struct LoadPeopleUseCase<'a> {
    pub store: &'a dyn PersonStore,
    pub reporter: &'a dyn Reporter,
}

impl<'a> LoadPeopleUseCase<'a> {
    pub fn execute(&self, path: &Path) -> Result<Roster> {
        let outcome = self.store.load(path)?;

        for skipped in &outcome.skipped {
            self.report_skip(skipped);
        }
        if !outcome.skipped.is_empty() {
            warn!(
                path = %path.display(),
                skipped = outcome.skipped.len(),
                "some records were skipped"
            );
        }
        info!(path = %path.display(), count = outcome.people.len(), "roster loaded");

        // 파일 순서를 그대로 유지한다(별자리 재정렬은 add 시점에만 수행).
        Ok(Roster::from_people(outcome.people))
    }

    fn report_skip(&self, skipped: &SkippedRecord) {
        match &skipped.reason {
            SkipReason::Schema(violation) => {
                self.reporter.raw(&format!("person data does not match schema: {violation}"));
                self.reporter.raw(&format!(
                    "invalid person data, skipping record {}",
                    skipped.position
                ));
            }
            SkipReason::BadDate(_) => {
                self.reporter.raw(&format!(
                    "failed to parse date in record {}, skipping",
                    skipped.position
                ));
            }
        }
    }
}
