use std::time::Duration;

use chrono::Local;
use clap::{Parser, Subcommand};

use aprs_console::app::settings::manager::SettingsManager;
use aprs_console::core::api::client::ApiClient;
use aprs_console::core::events::sse::run_event_stream;
use aprs_console::core::events::types::ServerEvent;
use aprs_console::core::schema::schema::CONFIG_SCHEMA;
use aprs_console::core::schema::types::FieldValue;
use aprs_console::core::status::projector::{
    project, project_system_error,
};
use aprs_console::utils::helpers::{
    format_number, normalize_server_url,
};
use aprs_console::Result;

/// APRS 收发服务控制台
#[derive(Parser, Debug)]
#[command(name = "aprs-console")]
#[command(about = "APRS 收发服务的桌面监控与配置控制台")]
#[command(version = "0.1.3")]
pub struct Args {
    /// 强制使用命令行模式（默认使用 GUI）
    #[arg(long, help = "强制使用命令行界面，默认启动图形界面")]
    pub cli: bool,

    /// 服务端基地址，优先于设置文件
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 订阅事件流，打印状态转移与解码消息
    Tail,
    /// 拉取并打印当前服务端配置
    ShowConfig,
    /// 下发重启接收命令
    Restart,
}

/// 解析服务端地址：命令行参数优先于设置文件
fn resolve_connection(
    server_override: Option<String>,
) -> Result<(String, Duration)> {
    let mut settings_manager = SettingsManager::new()?;
    if let Err(e) = settings_manager.load() {
        tracing::warn!(
            "Failed to load settings file, using defaults: {}",
            e
        );
    }
    let settings = settings_manager.settings();

    let url = server_override
        .unwrap_or_else(|| settings.server_url.clone());

    Ok((
        normalize_server_url(&url)?,
        Duration::from_secs(
            settings.request_timeout_secs,
        ),
    ))
}

fn print_event(event: &ServerEvent) {
    let stamp = Local::now().format("%H:%M:%S");
    match event {
        ServerEvent::AprsMessage { message } => {
            println!("[{}] APRS: {}", stamp, message);
        }
        ServerEvent::Status { topic, status } => {
            let display = project(*topic, status);
            println!("[{}] {}", stamp, display.label);
        }
        ServerEvent::SystemError { message } => {
            let display =
                project_system_error(message);
            println!("[{}] {}", stamp, display.label);
        }
        ServerEvent::BackendRestarted { message } => {
            println!("[{}] {}", stamp, message);
        }
    }
}

/// 跟随事件流直到服务端关闭连接
pub async fn run_tail(
    server_override: Option<String>,
) -> Result<()> {
    let (base_url, _) =
        resolve_connection(server_override)?;

    println!("Subscribing to {} ...", base_url);
    run_event_stream(&base_url, |event| {
        print_event(&event);
    })
    .await?;

    println!("Event stream closed by server");
    Ok(())
}

/// 拉取并打印服务端配置
pub async fn run_show_config(
    server_override: Option<String>,
) -> Result<()> {
    let (base_url, timeout) =
        resolve_connection(server_override)?;
    let client = ApiClient::new(&base_url, timeout)?;

    let doc = client.fetch_config().await?;

    for spec in &CONFIG_SCHEMA {
        let rendered = match doc.get(spec.key) {
            Some(FieldValue::Number(n)) => {
                format_number(*n)
            }
            Some(FieldValue::Text(s)) => s.clone(),
            Some(FieldValue::Boolean(b)) => {
                b.to_string()
            }
            None => "<unset>".to_string(),
        };
        println!("{}: {}", spec.label, rendered);
    }

    Ok(())
}

/// 下发重启接收命令并打印确认
pub async fn run_restart(
    server_override: Option<String>,
) -> Result<()> {
    let (base_url, timeout) =
        resolve_connection(server_override)?;
    let client = ApiClient::new(&base_url, timeout)?;

    let message = client.restart_reception().await?;
    println!("{}", message);

    Ok(())
}
