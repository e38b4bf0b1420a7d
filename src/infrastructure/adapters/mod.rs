//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod field_prompter;
mod person_store;
mod reporter;
mod table_renderer;

pub use config_repository::JsonConfigRepository;
pub use field_prompter::StdinPrompter;
pub use person_store::JsonFilePersonStore;
pub use reporter::ConsoleReporter;
pub use table_renderer::AsciiTableRenderer;
