//! GUI组件模块 - 包含各种UI组件的实现

pub mod config_form;
pub mod control_bar;
pub mod message_log;
pub mod status_panel;

// 重新导出主要组件
pub use config_form::render_config_form;
pub use control_bar::{
    render_control_bar, Feedback, UserAction,
};
pub use message_log::render_message_log;
pub use status_panel::render_status_panel;
