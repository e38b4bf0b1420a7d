//! 인물 레코드 구조 검사.
//! 범용 스키마 엔진 대신 고정 필드의 존재/타입만 확인한다.

use serde_json::Value;

use crate::domain::record::{REQUIRED_FIELDS, SchemaViolation};

/// 디코딩된 레코드가 인물 형태(객체 + 필수 문자열 필드)인지 검사한다.
/// 날짜 텍스트 형식은 이후 날짜 해석 단계에서 확인한다.
pub fn check_record(value: &Value) -> Result<(), SchemaViolation> {
    let Some(object) = value.as_object() else {
        return Err(SchemaViolation::NotAnObject);
    };

    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None => return Err(SchemaViolation::MissingField(field)),
            Some(Value::String(_)) => {}
            Some(_) => return Err(SchemaViolation::NotAString(field)),
        }
    }
    Ok(())
}
