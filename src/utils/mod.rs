//! 工具模块

pub mod helpers;

pub use helpers::{
    format_number, normalize_server_url,
};
