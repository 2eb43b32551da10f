//! 事件通道模块
//!
//! 定义服务端推送事件的类型、按名解析和 SSE 订阅循环

pub mod sse;
pub mod types;

pub use sse::{run_event_stream, SseParser};
pub use types::{parse_event, ServerEvent, Topic};
