pub mod float_format;
pub mod precision;


// 재수출
pub use float_format::FloatFormat;
pub use precision::Precision;
