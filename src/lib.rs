//! 절연 협조·신뢰성 계산 로직을 라이브러리로 분리하여 CLI 외의 호스트에서도 쓰기 쉽게 한다.

pub mod app;
pub mod config;
pub mod interp;
pub mod isolation;
pub mod reliability;
pub mod thermal;
pub mod ui_cli;
pub mod value;
