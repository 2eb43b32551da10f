//! 消息日志模块

pub mod message_log;

pub use message_log::{
    MessageEntry, MessageLog, MESSAGE_LOG_CAPACITY,
};
