//! 状态面板测试
//!
//! 测试事件路由、主题独立性和最后事件胜出语义

use aprs_console::{
    parse_event, ServerEvent, Severity, StatusBoard,
    Topic, MESSAGE_LOG_CAPACITY,
};

fn status_event(
    topic: Topic,
    status: &str,
) -> ServerEvent {
    ServerEvent::Status {
        topic,
        status: status.to_string(),
    }
}

#[test]
fn test_initial_state_is_unknown() {
    let board = StatusBoard::new();

    assert_eq!(
        board.display.transmission.label,
        "Transmission: Unknown"
    );
    assert_eq!(
        board.display.transmission.severity,
        Severity::Neutral
    );
    assert!(board.display.system_error.is_none());
    assert!(board.notice.is_none());
    assert!(board.messages.is_empty());
}

#[test]
fn test_status_event_updates_only_its_topic() {
    let mut board = StatusBoard::new();
    board.handle_event(status_event(
        Topic::Reception,
        "active",
    ));

    assert_eq!(
        board.display.reception.label,
        "Reception: Active"
    );
    // 其他主题保持初始投影
    assert_eq!(
        board.display.carrier.label,
        "Carrier Transmission: Unknown"
    );
    assert_eq!(
        board.display.transmission.label,
        "Transmission: Unknown"
    );
}

#[test]
fn test_last_event_wins_within_topic() {
    // active 之后 idle：最终显示 Idle，不回退
    let mut board = StatusBoard::new();
    board.handle_event(status_event(
        Topic::Transmission,
        "active",
    ));
    board.handle_event(status_event(
        Topic::Transmission,
        "idle",
    ));

    assert_eq!(
        board.display.transmission.label,
        "Transmission: Idle"
    );
    assert_eq!(
        board.display.transmission.severity,
        Severity::Nominal
    );
}

#[test]
fn test_redundant_delivery_is_idempotent() {
    let mut once = StatusBoard::new();
    once.handle_event(status_event(
        Topic::Carrier,
        "active",
    ));

    let mut twice = StatusBoard::new();
    twice.handle_event(status_event(
        Topic::Carrier,
        "active",
    ));
    twice.handle_event(status_event(
        Topic::Carrier,
        "active",
    ));

    assert_eq!(once.display, twice.display);
}

#[test]
fn test_aprs_messages_append_to_log() {
    let mut board = StatusBoard::new();
    board.handle_event(ServerEvent::AprsMessage {
        message: "KD8ABC>APRS:>hello".to_string(),
    });
    board.handle_event(ServerEvent::AprsMessage {
        message: "KD8ABC>APRS:>world".to_string(),
    });

    assert_eq!(board.messages.len(), 2);
    assert_eq!(
        board.messages.latest().unwrap().text,
        "KD8ABC>APRS:>world"
    );
}

#[test]
fn test_message_burst_respects_log_bound() {
    // 1005 条消息事件顺序到达，日志保留 m6..m1005
    let mut board = StatusBoard::new();
    for i in 1..=1005 {
        board.handle_event(
            ServerEvent::AprsMessage {
                message: format!("m{}", i),
            },
        );
    }

    assert_eq!(
        board.messages.len(),
        MESSAGE_LOG_CAPACITY
    );
    assert_eq!(
        board.messages.iter().next().unwrap().text,
        "m6"
    );
    assert_eq!(
        board.messages.latest().unwrap().text,
        "m1005"
    );
}

#[test]
fn test_system_error_is_surfaced_prominently() {
    let mut board = StatusBoard::new();
    board.handle_event(status_event(
        Topic::Reception,
        "active",
    ));
    board.handle_event(ServerEvent::SystemError {
        message: "device disconnected".to_string(),
    });

    let error =
        board.display.system_error.as_ref().unwrap();
    assert_eq!(
        error.label,
        "System Error: device disconnected"
    );
    assert_eq!(error.severity, Severity::Alert);

    // 系统错误不中断其他主题的处理
    board.handle_event(status_event(
        Topic::Reception,
        "stopped",
    ));
    assert_eq!(
        board.display.reception.label,
        "Reception: Stopped"
    );
}

#[test]
fn test_backend_restart_sets_notice() {
    let mut board = StatusBoard::new();
    board.handle_event(
        ServerEvent::BackendRestarted {
            message: "Backend restarted successfully."
                .to_string(),
        },
    );

    assert_eq!(
        board.notice.as_deref(),
        Some("Backend restarted successfully.")
    );
}

#[test]
fn test_wire_events_route_by_topic() {
    // 从命名事件到投影的整条链路
    let mut board = StatusBoard::new();

    let events = [
        (
            "reception_status",
            r#"{"status":"active"}"#,
        ),
        (
            "udp_listener_status",
            r#"{"status":"active"}"#,
        ),
        (
            "aprs_message",
            r#"{"message":"test packet"}"#,
        ),
        // 未知主题应被忽略
        ("telemetry_status", r#"{"status":"on"}"#),
    ];

    for (name, data) in events {
        if let Some(event) = parse_event(name, data) {
            board.handle_event(event);
        }
    }

    assert_eq!(
        board.display.reception.label,
        "Reception: Active"
    );
    assert_eq!(
        board.display.udp_listener.label,
        "UDP Listener: Active"
    );
    assert_eq!(board.messages.len(), 1);
    // 未知主题没有留下任何痕迹
    assert_eq!(
        board.display.transmission.label,
        "Transmission: Unknown"
    );
}
