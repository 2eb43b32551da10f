//! 错误类型模块

pub mod types;

pub use types::{AppError, ConsoleError, Result};
