//! 보일러 관련 계산 모듈 모음.

pub mod fuel_switch;

pub use fuel_switch::*;
