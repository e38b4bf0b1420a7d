//! 대화형 입력으로 인물을 추가하는 유스케이스.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::FieldPrompter;
use crate::domain::person::{Person, parse_birth_date};
use crate::domain::roster::Roster;

pub const NAME_LABEL: &str = "Name";
pub const SURNAME_LABEL: &str = "Surname";
pub const BIRTH_DATE_LABEL: &str = "Date of birth (DD.MM.YYYY)";
pub const ZODIAC_LABEL: &str = "Zodiac sign";

/// 네 필드를 순서대로 입력받아 명단에 추가한다.
/// 날짜 형식이 틀리면 재입력 없이 추가 전체를 중단한다.
pub struct AddPersonUseCase<'a> {
    pub prompter: &'a dyn FieldPrompter,
}

impl<'a> AddPersonUseCase<'a> {
    pub fn execute(&self, roster: &mut Roster) -> Result<()> {
        let name = self.prompter.ask(NAME_LABEL)?;
        let surname = self.prompter.ask(SURNAME_LABEL)?;
        let raw_date = self.prompter.ask(BIRTH_DATE_LABEL)?;
        let date_of_birth = parse_birth_date(raw_date.trim()).context("person was not added")?;
        let zodiac_sign = self.prompter.ask(ZODIAC_LABEL)?;

        roster.add(Person {
            name,
            surname,
            date_of_birth,
            zodiac_sign,
        });
        debug!(size = roster.len(), "person added");
        Ok(())
    }
}
