//! 状态投影模块
//!
//! 把各主题的原始状态字符串确定性地映射为显示投影。
//! 映射是全函数：表内未列出的原始状态一律落入该主题
//! 的回退行，不存在未定义结果。映射关系承载产品的
//! 状态语义，修改前先对照服务端的事件定义。

use crate::core::events::types::Topic;

use super::types::{Severity, StatusDisplay};

fn suffixed(
    topic: Topic,
    suffix: &str,
    severity: Severity,
) -> StatusDisplay {
    StatusDisplay::new(
        format!("{}: {}", topic.prefix(), suffix),
        severity,
    )
}

/// 投影一条主题状态
pub fn project(
    topic: Topic,
    raw_status: &str,
) -> StatusDisplay {
    match topic {
        Topic::Transmission => match raw_status {
            "active" => suffixed(
                topic,
                "Active",
                Severity::Alert,
            ),
            _ => suffixed(
                topic,
                "Idle",
                Severity::Nominal,
            ),
        },
        Topic::Reception => match raw_status {
            "active" => suffixed(
                topic,
                "Active",
                Severity::Info,
            ),
            "stopped" => suffixed(
                topic,
                "Stopped",
                Severity::Neutral,
            ),
            _ => suffixed(
                topic,
                "Idle",
                Severity::Nominal,
            ),
        },
        Topic::UdpListener => match raw_status {
            "active" => suffixed(
                topic,
                "Active",
                Severity::Warn,
            ),
            "stopped" => suffixed(
                topic,
                "Stopped",
                Severity::Neutral,
            ),
            _ => suffixed(
                topic,
                "Idle",
                Severity::Nominal,
            ),
        },
        Topic::Carrier => match raw_status {
            "active" => suffixed(
                topic,
                "Active",
                Severity::Special,
            ),
            "stopped" => suffixed(
                topic,
                "Stopped",
                Severity::Neutral,
            ),
            _ => suffixed(
                topic,
                "Idle",
                Severity::Nominal,
            ),
        },
        Topic::WavGeneration => match raw_status {
            "started" => suffixed(
                topic,
                "In Progress",
                Severity::Info,
            ),
            "completed" => suffixed(
                topic,
                "Completed",
                Severity::Nominal,
            ),
            _ => suffixed(
                topic,
                "Idle",
                Severity::Nominal,
            ),
        },
        // 整机状态原样回显，running 视为正常
        Topic::SystemStatus => StatusDisplay::new(
            format!(
                "{}: {}",
                topic.prefix(),
                raw_status
            ),
            if raw_status == "running" {
                Severity::Nominal
            } else {
                Severity::Neutral
            },
        ),
    }
}

/// 投影一条系统错误通告，正文原样回显
pub fn project_system_error(
    message: &str,
) -> StatusDisplay {
    StatusDisplay::new(
        format!("System Error: {}", message),
        Severity::Alert,
    )
}
