//! APRS 控制台库
//!
//! APRS 收发服务的桌面监控与配置控制台
//!
//! ## 功能特性
//!
//! - 服务端配置的拉取、表单编辑与提交
//! - 事件流的订阅与按主题路由
//! - 子系统状态的确定性显示投影
//! - 有界的解码消息日志
//! - GUI 与无界面命令行两种运行方式
//!
//! ## 使用示例
//!
//! ```
//! use aprs_console::{project, Topic};
//!
//! let display = project(Topic::Reception, "active");
//! assert_eq!(display.label, "Reception: Active");
//! ```

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

// 重新导出主要功能
pub use app::error::types::{
    AppError, ConsoleError, Result,
};
pub use core::api::client::ApiClient;
pub use core::events::types::{
    parse_event, ServerEvent, Topic,
};
pub use core::log::message_log::{
    MessageEntry, MessageLog, MESSAGE_LOG_CAPACITY,
};
pub use core::schema::{
    ConfigDocument, FieldKind, FieldValue, FormState,
    CONFIG_SCHEMA,
};
pub use core::status::board::StatusBoard;
pub use core::status::projector::{
    project, project_system_error,
};
pub use core::status::types::{
    DisplayState, Severity, StatusDisplay,
};
