//! 시각화 보조용 합성 시계열 생성 모듈 모음.

pub mod operating_hours;

pub use operating_hours::*;
