use serde::Deserialize;

use crate::core::schema::ConfigDocument;

/// 服务端响应状态标记
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// 操作成功
    Success,
    /// 服务端业务失败
    Error,
}

/// 命令类接口的响应体 {status, message}
#[derive(Debug, Clone, Deserialize)]
pub struct CommandResponse {
    /// 响应状态
    pub status: ResponseStatus,
    /// 服务端附带的说明文字
    #[serde(default)]
    pub message: Option<String>,
}

/// 配置拉取接口的响应体 {status, config, message}
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigResponse {
    /// 响应状态
    pub status: ResponseStatus,
    /// 当前服务端配置，失败时缺省
    #[serde(default)]
    pub config: Option<ConfigDocument>,
    /// 服务端附带的说明文字
    #[serde(default)]
    pub message: Option<String>,
}

impl CommandResponse {
    /// 取出说明文字，缺省时给出占位说明
    pub fn message_or(
        self,
        fallback: &str,
    ) -> String {
        self.message
            .unwrap_or_else(|| fallback.to_string())
    }
}
