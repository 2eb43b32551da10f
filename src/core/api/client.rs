//! REST 客户端模块
//!
//! 封装服务端的三个 REST 接口：配置拉取、配置提交与
//! 重启接收命令。服务端以 status:"error" 报告的业务
//! 失败被映射为 [`ConsoleError::Api`]，HTTP 层故障映射
//! 为 [`ConsoleError::Transport`]。

use std::time::Duration;

use crate::app::error::types::{ConsoleError, Result};
use crate::core::schema::ConfigDocument;

use super::types::{
    CommandResponse, ConfigResponse, ResponseStatus,
};

/// 配置接口路径
const CONFIG_PATH: &str = "/api/config";
/// 重启接收接口路径
const RESTART_RECEPTION_PATH: &str =
    "/api/restart_reception";

/// REST 客户端
///
/// 超时只作用于这里的请求/响应往返；事件流由
/// [`crate::core::events::sse`] 使用独立连接订阅。
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 创建新的 REST 客户端
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// 服务端基地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 拉取当前服务端配置
    pub async fn fetch_config(
        &self,
    ) -> Result<ConfigDocument> {
        let response: ConfigResponse = self
            .http
            .get(self.endpoint(CONFIG_PATH))
            .send()
            .await?
            .json()
            .await?;

        match response.status {
            ResponseStatus::Success => {
                response.config.ok_or_else(|| {
                    ConsoleError::api(
                        "response is missing the config document",
                    )
                })
            }
            ResponseStatus::Error => {
                Err(ConsoleError::api(
                    response.message.unwrap_or_else(
                        || {
                            "failed to fetch configuration"
                                .to_string()
                        },
                    ),
                ))
            }
        }
    }

    /// 提交配置文档，成功时返回服务端确认说明
    pub async fn submit_config(
        &self,
        doc: &ConfigDocument,
    ) -> Result<String> {
        // 业务失败也带 JSON 响应体，先解析再判断状态
        let response: CommandResponse = self
            .http
            .post(self.endpoint(CONFIG_PATH))
            .json(doc)
            .send()
            .await?
            .json()
            .await?;

        match response.status {
            ResponseStatus::Success => {
                Ok(response.message_or(
                    "Configuration updated.",
                ))
            }
            ResponseStatus::Error => {
                Err(ConsoleError::api(
                    response.message_or(
                        "failed to update configuration",
                    ),
                ))
            }
        }
    }

    /// 下发重启接收命令，成功时返回服务端确认说明
    pub async fn restart_reception(
        &self,
    ) -> Result<String> {
        let response: CommandResponse = self
            .http
            .post(
                self.endpoint(RESTART_RECEPTION_PATH),
            )
            .send()
            .await?
            .json()
            .await?;

        match response.status {
            ResponseStatus::Success => {
                Ok(response.message_or(
                    "Reception restarted.",
                ))
            }
            ResponseStatus::Error => {
                Err(ConsoleError::api(
                    response.message_or(
                        "failed to restart reception",
                    ),
                ))
            }
        }
    }
}
