//! Interface layer
//! 실행 인자/대화형 쉘 등 사용자 접점을 담당한다.

pub mod cli;
