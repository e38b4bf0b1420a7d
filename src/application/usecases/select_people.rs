//! 특정 달에 태어난 인물을 조회하는 유스케이스.

use crate::application::ports::Reporter;
use crate::domain::roster::{BirthMonth, Roster};

pub const NOT_FOUND_MESSAGE: &str = "no people born in the given month were found.";

pub struct SelectPeopleUseCase<'a> {
    pub reporter: &'a dyn Reporter,
}

impl<'a> SelectPeopleUseCase<'a> {
    /// 일치하는 인물을 1부터 번호를 매겨 출력하고 일치 건수를 반환한다.
    pub fn execute(&self, roster: &Roster, month: BirthMonth) -> usize {
        let mut count = 0;
        for person in roster.born_in_month(month) {
            count += 1;
            self.reporter.raw(&format!("{:>4}: {} {}", count, person.name, person.surname));
        }

        if count == 0 {
            self.reporter.raw(NOT_FOUND_MESSAGE);
        }
        count
    }
}
