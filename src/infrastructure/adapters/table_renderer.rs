//! 명단 표 렌더링 포트 구현 어댑터.

use crate::application::ports::RosterRenderer;
use crate::domain::person::Person;
use crate::infrastructure::render;

pub struct AsciiTableRenderer;

impl RosterRenderer for AsciiTableRenderer {
    fn render_table(&self, people: &[Person]) -> Vec<String> {
        render::render_roster_table(people)
    }
}
