//! 인물 엔티티와 생년월일 텍스트 형식.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// 파일 저장/대화형 입력에 공통으로 쓰는 생년월일 형식(DD.MM.YYYY).
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub zodiac_sign: String,
}

impl Person {
    /// 생년월일의 달(1~12).
    pub fn birth_month(&self) -> u32 {
        self.date_of_birth.month()
    }

    /// 표/파일 표기용 생년월일 문자열.
    pub fn birth_date_text(&self) -> String {
        format_birth_date(self.date_of_birth)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date `{input}`, expected DD.MM.YYYY")]
pub struct BirthDateError {
    pub input: String,
}

/// `DD.MM.YYYY` 문자열을 달력 날짜로 해석한다.
/// 존재하지 않는 날짜(13월, 2월 30일 등)는 오류로 처리한다.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, BirthDateError> {
    let invalid = || BirthDateError {
        input: text.to_string(),
    };
    if !has_date_shape(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, BIRTH_DATE_FORMAT).map_err(|_| invalid())
}

/// chrono의 `%Y`는 자릿수와 부호를 가리지 않으므로 연도는 정확히 4자리 숫자만 허용한다.
fn has_date_shape(text: &str) -> bool {
    let digits = |part: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = text.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None) => {
            digits(day, 1..=2) && digits(month, 1..=2) && digits(year, 4..=4)
        }
        _ => false,
    }
}

pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_birth_date("07.03.1991").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1991, 3, 7).unwrap());
        assert_eq!(format_birth_date(date), "07.03.1991");
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_birth_date("31.13.2020").is_err());
        assert!(parse_birth_date("30.02.2021").is_err());
        assert!(parse_birth_date("29.02.2020").is_ok());
    }

    #[test]
    fn year_must_have_exactly_four_digits() {
        for input in ["12.08.90", "01.01.-0005", "12.08.+1990", "12.08.19900", "+1.08.1990"] {
            assert!(parse_birth_date(input).is_err(), "{input} accepted");
        }
        assert_eq!(
            parse_birth_date("1.8.1990").unwrap(),
            NaiveDate::from_ymd_opt(1990, 8, 1).unwrap()
        );
    }

    #[test]
    fn rejects_iso_dates() {
        let err = parse_birth_date("1991-03-07").unwrap_err();
        assert_eq!(err.input, "1991-03-07");
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }
}
