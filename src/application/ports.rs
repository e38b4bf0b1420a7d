//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::person::Person;
use crate::domain::record::LoadOutcome;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 명단 파일 저장/로딩 포트.
pub trait PersonStore: Send + Sync {
    fn save(&self, path: &Path, people: &[Person]) -> Result<()>;
    /// 파일 열기/최상위 JSON 해석 실패만 오류로 반환하고,
    /// 레코드 단위 문제는 `LoadOutcome::skipped`로 전달한다.
    fn load(&self, path: &Path) -> Result<LoadOutcome>;
}

/// 인물 필드를 한 줄씩 입력받는 포트.
pub trait FieldPrompter: Send + Sync {
    fn ask(&self, label: &str) -> Result<String>;
}

/// 명단 표 렌더링 포트.
pub trait RosterRenderer: Send + Sync {
    fn render_table(&self, people: &[Person]) -> Vec<String>;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    /// 표/조회 결과/레코드 진단 등 일반 출력(stdout).
    fn raw(&self, line: &str);
    /// 알 수 없는 명령 등 오류 출력(stderr).
    fn error(&self, line: &str);
}
