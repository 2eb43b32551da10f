//! UI模块 - 用户界面相关功能

pub mod app;
pub mod components;
pub mod widgets;

use crate::app::error::types::Result;

/// 启动 GUI 应用程序
pub fn run_gui(
    server_override: Option<String>,
) -> Result<()> {
    app::run_gui(server_override)
}
