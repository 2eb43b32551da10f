//! 消息日志模块
//!
//! 解码消息的有界追加缓冲。到达顺序即保存顺序，最新
//! 的在末尾；超出容量时从最旧的一端淘汰，淘汰与追加
//! 在同一次调用内完成，外部观察不到超限的中间态。
//! 相同内容的消息不去重，全部保留。

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// 日志容量上限
pub const MESSAGE_LOG_CAPACITY: usize = 1000;

/// 单条解码消息
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    /// 本地到达时间
    pub received_at: DateTime<Local>,
    /// 消息正文
    pub text: String,
}

/// 解码消息日志
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    /// 创建空日志
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(
                MESSAGE_LOG_CAPACITY,
            ),
            capacity: MESSAGE_LOG_CAPACITY,
        }
    }

    /// 追加一条消息
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push_back(MessageEntry {
            received_at: Local::now(),
            text: text.into(),
        });

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// 当前消息数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 日志是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按保存顺序遍历全部消息，最新的在最后
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    /// 最新一条消息
    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }
}
