//! SSE 事件通道模块
//!
//! 服务端通过 Server-Sent Events 推送命名事件，每帧
//! 由 `event:` 行与 `data:` 行组成，空行分隔。这里
//! 提供增量的帧解析器和驱动字节流的订阅循环。按约定
//! 通道不做重连，流结束即返回，由调用方决定后续。

use std::time::Duration;

use futures::StreamExt;

use crate::app::error::types::Result;

use super::types::{parse_event, ServerEvent};

/// 事件流接口路径
const EVENTS_PATH: &str = "/api/events";

/// 建立事件流连接的超时
const CONNECT_TIMEOUT: Duration =
    Duration::from_secs(10);

/// 增量 SSE 帧解析器
///
/// 逐行输入（不含行终止符），在帧结束的空行处返回
/// 完整的 (事件名, 数据) 对。注释行与不使用的 SSE
/// 字段（id、retry）被跳过。
#[derive(Debug, Default)]
pub struct SseParser {
    event: String,
    data: String,
}

impl SseParser {
    /// 创建新的解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 输入一行，帧完成时返回 (事件名, 数据)
    ///
    /// 没有事件名的帧不携带主题，整帧丢弃。
    pub fn push_line(
        &mut self,
        line: &str,
    ) -> Option<(String, String)> {
        if line.is_empty() {
            let event = std::mem::take(&mut self.event);
            let data = std::mem::take(&mut self.data);
            if event.is_empty() {
                return None;
            }
            return Some((event, data));
        }

        // 冒号开头的行是注释
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':')
        {
            Some((field, value)) => (
                field,
                value
                    .strip_prefix(' ')
                    .unwrap_or(value),
            ),
            None => (line, ""),
        };

        match field {
            "event" => {
                self.event = value.to_string();
            }
            "data" => {
                // 多个 data 行以换行拼接
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                self.data.push_str(value);
            }
            _ => {}
        }

        None
    }
}

/// 订阅服务端事件流
///
/// 每解码出一条事件就调用一次 `on_event`，调用顺序
/// 即到达顺序。流正常结束返回 `Ok(())`，连接失败或
/// 中断返回传输错误；两种情况都不在此处重试。
pub async fn run_event_stream(
    base_url: &str,
    mut on_event: impl FnMut(ServerEvent),
) -> Result<()> {
    // 事件流是长连接，只限制建连时间，不限制总时长
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;

    let url = format!("{}{}", base_url, EVENTS_PATH);
    let response = client
        .get(&url)
        .header("Accept", "text/event-stream")
        .send()
        .await?
        .error_for_status()?;

    tracing::info!("Event stream connected: {}", url);

    let mut stream = response.bytes_stream();
    let mut parser = SseParser::new();
    let mut pending: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        pending.extend_from_slice(&chunk);

        // 逐行送入解析器，保留末尾未断行的残余字节
        while let Some(pos) =
            pending.iter().position(|&b| b == b'\n')
        {
            let raw: Vec<u8> =
                pending.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line =
                line.trim_end_matches(['\n', '\r']);

            if let Some((name, data)) =
                parser.push_line(line)
            {
                if let Some(event) =
                    parse_event(&name, &data)
                {
                    on_event(event);
                }
            }
        }
    }

    tracing::info!("Event stream ended");
    Ok(())
}
