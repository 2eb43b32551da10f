use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// 网络传输错误（HTTP 请求或事件通道不可达）
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端返回 status:"error" 的业务错误
    #[error("Server error: {message}")]
    Api { message: String },

    /// 表单字段验证错误
    #[error("Validation failed: {field} - {message}")]
    Validation { field: String, message: String },

    /// 本地设置文件错误
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// 事件通道错误
    #[error("Event channel error: {0}")]
    Channel(String),

    /// GUI 相关错误
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(http_error) =
            err.downcast_ref::<reqwest::Error>()
        {
            return ConsoleError::api(
                http_error.to_string(),
            );
        }
        ConsoleError::settings(err.to_string())
    }
}

impl ConsoleError {
    /// 创建服务端业务错误
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建设置错误
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// 创建事件通道错误
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel(message.into())
    }
}

/// 结果类型别名
pub type Result<T> =
    std::result::Result<T, ConsoleError>;
pub type AppError = ConsoleError;
