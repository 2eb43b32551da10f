//! 基础控件模块

pub mod status;

pub use status::{severity_color, StatusLamp};
