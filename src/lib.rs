//! zodiac-roster library root.
//! Clean Architecture 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 대화형 쉘 실행 함수.
pub fn run(preload: Option<String>) -> Result<()> {
    let composition = AppComposition::default();
    interface::cli::start_session(&composition, preload)
}

/// 설정 점검 JSON 문자열 반환 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    infrastructure::config::inspect_pretty_json()
}
