//! 명단(Roster) 컬렉션과 정렬/조회 규칙.

use thiserror::Error;

use crate::domain::person::Person;

/// 메모리 상의 인물 명단.
/// `add`를 거칠 때마다 별자리 오름차순 정렬을 유지한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 로딩 결과로 명단을 만든다. 전달된 순서를 다시 정렬하지 않는다.
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// 인물을 추가하고 전체 명단을 별자리 기준으로 다시 정렬한다.
    pub fn add(&mut self, person: Person) {
        self.people.push(person);
        self.people.sort_by(|a, b| a.zodiac_sign.cmp(&b.zodiac_sign));
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// 주어진 달에 태어난 인물을 명단 순서대로 돌려준다(연도 무관).
    pub fn born_in_month(&self, month: BirthMonth) -> impl Iterator<Item = &Person> {
        self.people
            .iter()
            .filter(move |person| person.birth_month() == month.get())
    }
}

/// 1~12 범위가 보장된 달 값.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMonth(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    #[error("month must be an integer, got `{0}`")]
    NotANumber(String),
    #[error("month must be between 1 and 12, got {0}")]
    OutOfRange(i64),
}

impl BirthMonth {
    pub fn new(month: u32) -> Result<Self, MonthError> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(MonthError::OutOfRange(i64::from(month)))
        }
    }

    /// 명령 인자 문자열을 달 값으로 해석한다.
    pub fn parse(raw: &str) -> Result<Self, MonthError> {
        let raw = raw.trim();
        let value: i64 = raw
            .parse()
            .map_err(|_| MonthError::NotANumber(raw.to_string()))?;
        match u32::try_from(value) {
            Ok(month) if (1..=12).contains(&month) => Ok(Self(month)),
            _ => Err(MonthError::OutOfRange(value)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::parse_birth_date;

    fn person(name: &str, date: &str, sign: &str) -> Person {
        Person {
            name: name.to_string(),
            surname: format!("{name}ov"),
            date_of_birth: parse_birth_date(date).unwrap(),
            zodiac_sign: sign.to_string(),
        }
    }

    #[test]
    fn add_keeps_zodiac_order() {
        let mut roster = Roster::new();
        roster.add(person("a", "01.01.1990", "Virgo"));
        roster.add(person("b", "01.02.1990", "Aries"));
        roster.add(person("c", "01.03.1990", "Leo"));
        roster.add(person("d", "01.04.1990", "Aries"));

        let signs: Vec<&str> = roster
            .people()
            .iter()
            .map(|p| p.zodiac_sign.as_str())
            .collect();
        assert_eq!(signs, ["Aries", "Aries", "Leo", "Virgo"]);
    }

    #[test]
    fn from_people_keeps_given_order() {
        let roster = Roster::from_people(vec![
            person("a", "01.01.1990", "Virgo"),
            person("b", "01.02.1990", "Aries"),
        ]);
        assert_eq!(roster.people()[0].zodiac_sign, "Virgo");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn month_filter_ignores_year() {
        let roster = Roster::from_people(vec![
            person("a", "10.01.1990", "Capricorn"),
            person("b", "11.03.1985", "Pisces"),
            person("c", "25.03.2001", "Aries"),
            person("d", "05.05.1970", "Taurus"),
        ]);
        let month = BirthMonth::parse("3").unwrap();
        let names: Vec<&str> = roster.born_in_month(month).map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn month_parse_rejects_bad_input() {
        assert_eq!(
            BirthMonth::parse("march"),
            Err(MonthError::NotANumber("march".to_string()))
        );
        assert_eq!(BirthMonth::parse("13"), Err(MonthError::OutOfRange(13)));
        assert_eq!(BirthMonth::parse("-1"), Err(MonthError::OutOfRange(-1)));
        assert_eq!(BirthMonth::parse(" 12 ").map(BirthMonth::get), Ok(12));
        assert!(BirthMonth::new(0).is_err());
    }
}
