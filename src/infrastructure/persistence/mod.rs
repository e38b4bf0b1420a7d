//! 명단 JSON 파일 인코딩/디코딩.
//! 생년월일은 ISO 형식이 아닌 `DD.MM.YYYY` 문자열로 저장한다.

pub mod schema;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::person::{Person, format_birth_date, parse_birth_date};
use crate::domain::record::{LoadOutcome, SkipReason, SkippedRecord};

const INDENT: &[u8] = b"    ";

/// 파일 상의 인물 표현. 필드 순서가 그대로 출력 순서가 된다.
#[derive(Debug, Serialize, Deserialize)]
struct PersonRecord {
    name: String,
    surname: String,
    date_of_birth: String,
    zodiac_sign: String,
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            surname: person.surname.clone(),
            date_of_birth: format_birth_date(person.date_of_birth),
            zodiac_sign: person.zodiac_sign.clone(),
        }
    }
}

/// 명단을 4칸 들여쓰기 JSON 배열로 인코딩한다(비 ASCII 문자는 이스케이프하지 않음).
pub fn encode_people(people: &[Person]) -> Result<Vec<u8>> {
    let records: Vec<PersonRecord> = people.iter().map(PersonRecord::from).collect();

    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

/// 최상위 JSON 값을 레코드 단위로 판정한다.
/// 최상위가 배열이 아니면 오류이며, 개별 레코드 문제는 건너뛴 목록에 담는다.
pub fn decode_people(value: Value) -> Result<LoadOutcome> {
    let Value::Array(items) = value else {
        bail!("expected a JSON array of people at the top level");
    };

    let mut outcome = LoadOutcome::default();
    for (idx, item) in items.into_iter().enumerate() {
        let position = idx + 1;

        if let Err(violation) = schema::check_record(&item) {
            outcome.skipped.push(SkippedRecord {
                position,
                reason: SkipReason::Schema(violation),
            });
            continue;
        }

        let record: PersonRecord = serde_json::from_value(item)
            .with_context(|| format!("record {position} could not be decoded"))?;
        match parse_birth_date(&record.date_of_birth) {
            Ok(date_of_birth) => outcome.people.push(Person {
                name: record.name,
                surname: record.surname,
                date_of_birth,
                zodiac_sign: record.zodiac_sign,
            }),
            Err(err) => outcome.skipped.push(SkippedRecord {
                position,
                reason: SkipReason::BadDate(err.input),
            }),
        }
    }
    Ok(outcome)
}

/// 대상 파일을 덮어써 명단을 저장한다. 상위 디렉터리가 없으면 만든다.
pub fn save_people(path: &Path, people: &[Person]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let bytes = encode_people(people)?;
    fs::write(path, bytes)
        .with_context(|| format!("failed to write roster file {}", path.display()))
}

/// 파일에서 명단을 읽는다. 파일 열기/JSON 해석 실패 시 부분 결과 없이 오류를 반환한다.
pub fn load_people(path: &Path) -> Result<LoadOutcome> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
    decode_people(value).with_context(|| format!("invalid roster file {}", path.display()))
}
