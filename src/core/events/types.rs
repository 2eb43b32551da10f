use serde::Deserialize;

/// 状态事件主题
///
/// 每个主题独立维护自己的显示投影，主题之间没有顺序
/// 约束。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Topic {
    /// 发射子系统
    Transmission,
    /// 接收子系统
    Reception,
    /// UDP 监听子系统
    UdpListener,
    /// 载波发射子系统
    Carrier,
    /// WAV 波形生成
    WavGeneration,
    /// 整机运行状态
    SystemStatus,
}

impl Topic {
    /// 主题的显示前缀
    pub fn prefix(&self) -> &'static str {
        match self {
            Topic::Transmission => "Transmission",
            Topic::Reception => "Reception",
            Topic::UdpListener => "UDP Listener",
            Topic::Carrier => "Carrier Transmission",
            Topic::WavGeneration => "WAV Generation",
            Topic::SystemStatus => "System Status",
        }
    }
}

/// 服务端推送事件
///
/// 事件即用即弃，不缓存不重放；同一主题重复到达的
/// 相同状态会被原样接受并重绘同一投影。
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// 解码出的 APRS 消息
    AprsMessage {
        /// 消息正文
        message: String,
    },
    /// 子系统状态转移
    Status {
        /// 事件主题
        topic: Topic,
        /// 原始状态字符串
        status: String,
    },
    /// 系统级错误通告
    SystemError {
        /// 错误说明
        message: String,
    },
    /// 服务端重启完成通告
    BackendRestarted {
        /// 通告正文
        message: String,
    },
}

/// 携带 status 字段的事件负载
#[derive(Debug, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    status: String,
}

/// 携带 message 字段的事件负载
#[derive(Debug, Deserialize)]
struct MessagePayload {
    #[serde(default)]
    message: String,
}

fn status_payload(data: &str) -> Option<String> {
    match serde_json::from_str::<StatusPayload>(data) {
        Ok(payload) => Some(payload.status),
        Err(e) => {
            tracing::warn!(
                "Malformed status payload: {} ({})",
                data,
                e
            );
            None
        }
    }
}

fn message_payload(data: &str) -> Option<String> {
    match serde_json::from_str::<MessagePayload>(data)
    {
        Ok(payload) => Some(payload.message),
        Err(e) => {
            tracing::warn!(
                "Malformed message payload: {} ({})",
                data,
                e
            );
            None
        }
    }
}

/// 解析一条命名事件
///
/// 未知的事件名返回 `None`（向前兼容，静默忽略）；
/// 负载无法解析时同样返回 `None`，只记录告警。
pub fn parse_event(
    name: &str,
    data: &str,
) -> Option<ServerEvent> {
    let status = |topic: Topic| {
        status_payload(data).map(|status| {
            ServerEvent::Status { topic, status }
        })
    };

    match name {
        "aprs_message" => {
            message_payload(data).map(|message| {
                ServerEvent::AprsMessage { message }
            })
        }
        "transmission_status" => {
            status(Topic::Transmission)
        }
        "reception_status" => status(Topic::Reception),
        "udp_listener_status" => {
            status(Topic::UdpListener)
        }
        "carrier_status" => status(Topic::Carrier),
        "wav_generation" => {
            status(Topic::WavGeneration)
        }
        "system_status" => status(Topic::SystemStatus),
        "system_error" => {
            message_payload(data).map(|message| {
                ServerEvent::SystemError { message }
            })
        }
        "backend_restarted" => {
            message_payload(data).map(|message| {
                ServerEvent::BackendRestarted {
                    message,
                }
            })
        }
        _ => {
            tracing::debug!(
                "Ignoring unknown event: {}",
                name
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_events() {
        assert_eq!(
            parse_event(
                "transmission_status",
                r#"{"status":"active"}"#
            ),
            Some(ServerEvent::Status {
                topic: Topic::Transmission,
                status: "active".to_string(),
            })
        );

        assert_eq!(
            parse_event(
                "aprs_message",
                r#"{"message":"KD8ABC>APRS:hello"}"#
            ),
            Some(ServerEvent::AprsMessage {
                message: "KD8ABC>APRS:hello"
                    .to_string(),
            })
        );

        assert_eq!(
            parse_event(
                "backend_restarted",
                r#"{"message":"Backend restarted successfully."}"#
            ),
            Some(ServerEvent::BackendRestarted {
                message:
                    "Backend restarted successfully."
                        .to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        assert_eq!(
            parse_event(
                "firmware_update",
                r#"{"status":"active"}"#
            ),
            None
        );
    }

    #[test]
    fn test_missing_field_defaults_empty() {
        // status 字段缺省时按空字符串处理，落入回退投影
        assert_eq!(
            parse_event("reception_status", "{}"),
            Some(ServerEvent::Status {
                topic: Topic::Reception,
                status: String::new(),
            })
        );
    }

    #[test]
    fn test_malformed_payload_is_dropped() {
        assert_eq!(
            parse_event(
                "reception_status",
                "not json"
            ),
            None
        );
    }
}
