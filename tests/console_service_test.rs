//! 控制台服务测试
//!
//! 测试命令派发的结果回传和拉取序号语义

use std::time::Duration;

use tokio::sync::mpsc;

use aprs_console::core::services::console_service::{
    ConsoleService, UiMessage,
};
use aprs_console::ApiClient;

/// 指向不可达端口的客户端，命令应快速失败
fn unreachable_client() -> ApiClient {
    ApiClient::new(
        "http://127.0.0.1:9",
        Duration::from_millis(200),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_results_carry_dispatch_sequence() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut service = ConsoleService::new(
        unreachable_client(),
        tokio::runtime::Handle::current(),
        tx,
    );

    // 序号随派发单调递增
    let first = service.fetch_config();
    let second = service.fetch_config();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    // 两次拉取各送回一条结果，序号与派发对应；
    // 持有方只应用序号等于最近派发的那条
    let mut seen = Vec::new();
    for _ in 0..2 {
        match rx.recv().await {
            Some(UiMessage::ConfigFetched {
                seq,
                result,
            }) => {
                assert!(
                    result.is_err(),
                    "unreachable server must yield a transport error"
                );
                seen.push(seq);
            }
            other => {
                panic!(
                    "Unexpected message: {:?}",
                    other
                )
            }
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2]);
}

#[tokio::test]
async fn test_restart_reports_outcome_once() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = ConsoleService::new(
        unreachable_client(),
        tokio::runtime::Handle::current(),
        tx,
    );

    service.restart_reception();

    match rx.recv().await {
        Some(UiMessage::RestartDone { result }) => {
            assert!(result.is_err());
        }
        other => {
            panic!("Unexpected message: {:?}", other)
        }
    }
}
