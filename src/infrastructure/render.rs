//! 명단 콘솔 표 렌더링 모듈.

use unicode_width::UnicodeWidthStr;

use crate::domain::person::Person;

const COLUMN_WIDTHS: [usize; 5] = [4, 20, 20, 15, 13];
const HEADERS: [&str; 5] = ["No", "Name", "Surname", "Zodiac sign", "Date of birth"];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// 테두리/헤더/행으로 구성된 명단 표를 줄 단위로 생성한다.
pub fn render_roster_table(people: &[Person]) -> Vec<String> {
    let border = border_line();
    let mut lines = Vec::with_capacity(people.len() + 4);

    lines.push(border.clone());
    lines.push(render_row(HEADERS.map(|h| (h.to_string(), Align::Center))));
    lines.push(border.clone());

    for (idx, person) in people.iter().enumerate() {
        lines.push(render_row([
            ((idx + 1).to_string(), Align::Center),
            (person.name.clone(), Align::Left),
            (person.surname.clone(), Align::Left),
            (person.zodiac_sign.clone(), Align::Left),
            (person.birth_date_text(), Align::Left),
        ]));
    }

    lines.push(border);
    lines
}

fn border_line() -> String {
    let segments: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+", segments.join("-+-"))
}

fn render_row(cells: [(String, Align); 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|((text, align), width)| pad(text, width, *align))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// 표시 폭 기준으로 채운다. 폭을 넘는 값은 자르지 않는다.
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{text}{}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}
