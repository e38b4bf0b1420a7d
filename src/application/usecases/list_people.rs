//! 명단을 표 형태로 출력하는 유스케이스.

use crate::application::ports::{Reporter, RosterRenderer};
use crate::domain::roster::Roster;

pub struct ListPeopleUseCase<'a> {
    pub renderer: &'a dyn RosterRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListPeopleUseCase<'a> {
    /// 읽기 전용 조회이며 명단을 변경하지 않는다.
    pub fn execute(&self, roster: &Roster) {
        for line in self.renderer.render_table(roster.people()) {
            self.reporter.raw(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingReporter, person};
    use crate::infrastructure::adapters::AsciiTableRenderer;

    #[test]
    fn renders_rows_between_borders() {
        let roster = Roster::from_people(vec![
            person("Ivan", "12.08.1990", "Leo"),
            person("Anna", "01.04.1992", "Aries"),
        ]);
        let reporter = RecordingReporter::default();
        ListPeopleUseCase {
            renderer: &AsciiTableRenderer,
            reporter: &reporter,
        }
        .execute(&roster);

        let lines = reporter.out_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
        assert!(lines[3].contains("Ivan"));
        assert!(lines[4].contains("01.04.1992"));
    }
}
