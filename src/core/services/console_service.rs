//! 控制台服务模块
//!
//! 负责派发异步命令（配置拉取、配置提交、重启接收）
//! 和事件通道订阅，并把全部结果与推送事件经由同一条
//! 无界通道送回 UI 线程。UI 线程单线程地排空通道，
//! 每条消息处理到完成，顺序即到达顺序。
//!
//! 命令遵循一次确认的约定：确认结果只用于用户反馈，
//! 不直接改写任何状态投影，状态转移一律经事件通道
//! 到达。

use tokio::sync::mpsc;

use crate::app::error::types::Result;
use crate::core::api::client::ApiClient;
use crate::core::events::sse::run_event_stream;
use crate::core::events::types::ServerEvent;
use crate::core::schema::ConfigDocument;

/// 送往 UI 线程的消息
#[derive(Debug)]
pub enum UiMessage {
    /// 服务端推送事件
    Server(ServerEvent),
    /// 配置拉取完成，seq 用于丢弃过期响应
    ConfigFetched {
        /// 本次拉取的派发序号
        seq: u64,
        /// 拉取结果
        result: Result<ConfigDocument>,
    },
    /// 配置提交完成，成功时携带服务端确认说明
    SubmitDone {
        /// 提交结果
        result: Result<String>,
    },
    /// 重启接收命令完成
    RestartDone {
        /// 命令结果
        result: Result<String>,
    },
    /// 事件通道断开
    ChannelDown {
        /// 断开原因
        reason: String,
    },
}

/// 控制台服务
///
/// 持有 REST 客户端与 tokio runtime 句柄。所有异步
/// 操作互不阻塞：进行中的配置拉取不会推迟事件通道的
/// 投递，命令之间也互相独立。
pub struct ConsoleService {
    api_client: ApiClient,
    runtime_handle: tokio::runtime::Handle,
    tx: mpsc::UnboundedSender<UiMessage>,
    fetch_seq: u64,
}

impl ConsoleService {
    /// 创建新的控制台服务
    pub fn new(
        api_client: ApiClient,
        runtime_handle: tokio::runtime::Handle,
        tx: mpsc::UnboundedSender<UiMessage>,
    ) -> Self {
        Self {
            api_client,
            runtime_handle,
            tx,
            fetch_seq: 0,
        }
    }

    /// 服务端基地址
    pub fn base_url(&self) -> &str {
        self.api_client.base_url()
    }

    /// 派发一次配置拉取，返回本次拉取的序号
    ///
    /// 响应携带相同序号送回；持有方只应用序号等于最近
    /// 一次派发的结果，迟到的旧响应被确定性丢弃，不会
    /// 覆盖更新的状态。
    pub fn fetch_config(&mut self) -> u64 {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let client = self.api_client.clone();
        let tx = self.tx.clone();

        self.runtime_handle.spawn(async move {
            let result = client.fetch_config().await;
            let _ = tx.send(
                UiMessage::ConfigFetched {
                    seq,
                    result,
                },
            );
        });

        seq
    }

    /// 派发一次配置提交
    pub fn submit_config(&self, doc: ConfigDocument) {
        let client = self.api_client.clone();
        let tx = self.tx.clone();

        self.runtime_handle.spawn(async move {
            let result =
                client.submit_config(&doc).await;
            let _ = tx.send(UiMessage::SubmitDone {
                result,
            });
        });
    }

    /// 派发重启接收命令
    pub fn restart_reception(&self) {
        let client = self.api_client.clone();
        let tx = self.tx.clone();

        self.runtime_handle.spawn(async move {
            let result =
                client.restart_reception().await;
            let _ = tx.send(UiMessage::RestartDone {
                result,
            });
        });
    }

    /// 启动事件通道订阅任务
    ///
    /// 流结束或出错时送回一条 ChannelDown，之后任务
    /// 退出；按约定不在客户端重连。
    pub fn start_event_channel(&self) {
        let base_url = self
            .api_client
            .base_url()
            .to_string();
        let tx = self.tx.clone();

        self.runtime_handle.spawn(async move {
            let forward = tx.clone();
            let result =
                run_event_stream(&base_url, |event| {
                    let _ = forward.send(
                        UiMessage::Server(event),
                    );
                })
                .await;

            let reason = match result {
                Ok(()) => "event stream closed by server"
                    .to_string(),
                Err(e) => e.to_string(),
            };
            tracing::warn!(
                "Event channel down: {}",
                reason
            );
            let _ = tx.send(UiMessage::ChannelDown {
                reason,
            });
        });
    }
}
