//! 设置文件路径模块
//! 负责定位客户端本地设置文件 console.toml

use crate::app::error::types::{ConsoleError, Result};
use std::path::{Path, PathBuf};

/// 设置文件名
const SETTINGS_FILE_NAME: &str = "console.toml";

/// 设置路径管理器
pub struct SettingsPaths {
    settings_file: PathBuf,
}

impl SettingsPaths {
    /// 创建新的设置路径管理器
    pub fn new() -> Result<Self> {
        let settings_file = Self::locate_settings_file()?;

        Ok(Self { settings_file })
    }

    /// 获取设置文件路径
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// 定位设置文件
    ///
    /// 查找顺序：当前工作目录 → 可执行文件目录 →
    /// 用户配置目录。都不存在时返回用户配置目录下的
    /// 默认路径（首次保存时创建）。
    fn locate_settings_file() -> Result<PathBuf> {
        let current_dir = std::env::current_dir()
            .map_err(|e| {
                ConsoleError::settings(format!(
                    "Failed to get current directory: {}",
                    e
                ))
            })?;

        let cwd_file =
            current_dir.join(SETTINGS_FILE_NAME);
        if cwd_file.exists() {
            tracing::info!(
                "Found settings file in working directory: {:?}",
                cwd_file
            );
            return Ok(cwd_file);
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let exe_file =
                    exe_dir.join(SETTINGS_FILE_NAME);
                if exe_file.exists() {
                    tracing::info!(
                        "Found settings file in executable directory: {:?}",
                        exe_file
                    );
                    return Ok(exe_file);
                }
            }
        }

        let user_dir = dirs::config_dir()
            .map(|d| d.join("aprs-console"))
            .unwrap_or(current_dir);
        let user_file = user_dir.join(SETTINGS_FILE_NAME);

        tracing::info!(
            "Using settings file path: {:?}",
            user_file
        );
        Ok(user_file)
    }
}
