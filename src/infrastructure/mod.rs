//! Infrastructure layer
//! 파일시스템/콘솔과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod render;
