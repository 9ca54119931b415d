//! Data models

pub mod student;
pub mod prediction;

pub use student::*;
pub use prediction::*;
