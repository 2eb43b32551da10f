//! 状态投影模块
//!
//! 定义显示状态类型、按主题的投影规则和事件路由面板

pub mod board;
pub mod projector;
/// 显示状态类型定义
pub mod types;

pub use board::StatusBoard;
pub use projector::{project, project_system_error};
pub use types::{
    DisplayState, Severity, StatusDisplay,
};
