pub mod adder;
pub mod config;
pub mod decision;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use adder::StochasticAdder;
pub use config::AdderConfig;
pub use decision::choose_rounding;
