//! 设置管理模块
//! 负责加载、保存和管理客户端本地设置

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use super::paths::SettingsPaths;

/// 客户端本地设置
///
/// 这里只存放客户端自身的连接参数；收发服务的运行
/// 配置（频率、呼号等）保存在服务端，通过 REST 接口
/// 同步，不落在本地文件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// 服务端基地址
    pub server_url: String,
    /// HTTP 请求超时（秒），不作用于事件流
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            // Flask 开发服务的默认端口
            server_url: "http://127.0.0.1:5000"
                .to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// 设置管理器
pub struct SettingsManager {
    settings_paths: SettingsPaths,
    settings: AppSettings,
}

impl SettingsManager {
    /// 创建新的设置管理器
    pub fn new() -> Result<Self> {
        let settings_paths = SettingsPaths::new()?;

        Ok(Self {
            settings_paths,
            settings: AppSettings::default(),
        })
    }

    /// 加载设置文件
    ///
    /// 文件不存在时保留默认设置，不视为错误。
    pub fn load(&mut self) -> Result<()> {
        let settings_file =
            self.settings_paths.settings_file();

        if settings_file.exists() {
            let content =
                fs::read_to_string(settings_file)
                    .with_context(|| {
                        format!(
                            "Failed to read settings file: {:?}",
                            settings_file
                        )
                    })?;

            self.settings = toml::from_str(&content)
                .with_context(|| {
                    format!(
                        "Failed to parse settings file: {:?}",
                        settings_file
                    )
                })?;

            tracing::info!(
                "Settings loaded from {:?}",
                settings_file
            );
        } else {
            tracing::info!(
                "Settings file not found, using defaults"
            );
        }

        Ok(())
    }

    /// 保存设置文件
    pub fn save(&self) -> Result<()> {
        let settings_file =
            self.settings_paths.settings_file();

        if let Some(parent) = settings_file.parent() {
            fs::create_dir_all(parent).with_context(
                || {
                    format!(
                        "Failed to create settings directory: {:?}",
                        parent
                    )
                },
            )?;
        }

        let content =
            toml::to_string_pretty(&self.settings)
                .context(
                    "Failed to serialize settings",
                )?;

        fs::write(settings_file, content).with_context(
            || {
                format!(
                    "Failed to write settings file: {:?}",
                    settings_file
                )
            },
        )?;

        Ok(())
    }

    /// 获取当前设置
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// 获取可变设置
    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }
}
