//! 명령 단위 유스케이스 모음.

pub mod add_person;
pub mod inspect_config;
pub mod list_people;
pub mod load_people;
pub mod save_people;
pub mod select_people;
