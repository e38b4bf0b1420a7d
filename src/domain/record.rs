//! 파일에서 읽은 레코드의 판정 결과(채택/건너뜀).

use thiserror::Error;

use crate::domain::person::Person;

/// 인물 레코드가 갖춰야 하는 필드 목록.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "surname", "date_of_birth", "zodiac_sign"];

/// 레코드 구조 검사 실패 사유.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("record is not an object")]
    NotAnObject,
    #[error("'{0}' is a required property")]
    MissingField(&'static str),
    #[error("'{0}' is not of type 'string'")]
    NotAString(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Schema(SchemaViolation),
    BadDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 원본 배열 기준 1부터 시작하는 위치.
    pub position: usize,
    pub reason: SkipReason,
}

/// 파일 로딩 결과. 인물 순서는 파일 순서를 그대로 유지한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub people: Vec<Person>,
    pub skipped: Vec<SkippedRecord>,
}
