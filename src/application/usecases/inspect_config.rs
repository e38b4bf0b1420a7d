//! 설정 파일 탐색/병합 결과를 출력하는 유스케이스.

use anyhow::Result;

use crate::application::ports::{ConfigRepository, Reporter};

/// 현재 적용 중인 설정을 사람이 읽기 쉬운 JSON으로 출력한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self) -> Result<()> {
        let json = self.config_repo.inspect_pretty_json()?;
        for line in json.lines() {
            self.reporter.raw(line);
        }
        Ok(())
    }
}
