//! 状态面板模块
//!
//! 把单一入站事件序列按主题路由到对应处理：状态事件
//! 更新显示投影，消息事件进入日志，通告事件更新通告
//! 槽位。每条事件处理到完成后才处理下一条，主题内按
//! 到达顺序生效（最后到达者胜出），主题之间互不影响。

use crate::core::events::types::ServerEvent;
use crate::core::log::message_log::MessageLog;

use super::projector::{
    project, project_system_error,
};
use super::types::DisplayState;

/// 状态面板：事件路由与最新投影的存储
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    /// 各主题的当前显示投影
    pub display: DisplayState,
    /// 解码消息日志
    pub messages: MessageLog,
    /// 最近一次服务端重启通告，展示后由持有方清除
    pub notice: Option<String>,
}

impl StatusBoard {
    /// 创建初始状态的面板
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一条服务端事件
    ///
    /// 对重复到达的相同状态幂等：同一投影被原样重算
    /// 重写一次。
    pub fn handle_event(
        &mut self,
        event: ServerEvent,
    ) {
        match event {
            ServerEvent::AprsMessage { message } => {
                self.messages.append(message);
            }
            ServerEvent::Status { topic, status } => {
                *self.display.slot_mut(topic) =
                    project(topic, &status);
            }
            ServerEvent::SystemError { message } => {
                tracing::error!(
                    "System error announced: {}",
                    message
                );
                self.display.system_error = Some(
                    project_system_error(&message),
                );
            }
            ServerEvent::BackendRestarted {
                message,
            } => {
                tracing::info!(
                    "Backend restarted: {}",
                    message
                );
                self.notice = Some(message);
            }
        }
    }
}
