//! 服务层模块

pub mod console_service;

pub use console_service::{
    ConsoleService, UiMessage,
};
