// Windows GUI应用程序配置，隐藏控制台窗口
#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)]

mod cli;

use clap::Parser;
use cli::{Args, Commands};

use aprs_console::app::logging::setup::init_logging;
use aprs_console::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // 解析命令行参数
    let args = Args::parse();

    // 如果没有指定 --cli 且没有子命令，启动 GUI
    if !args.cli && args.command.is_none() {
        return aprs_console::ui::run_gui(args.server);
    }

    // 如果指定了 --cli 但没有子命令，显示帮助信息
    if args.cli && args.command.is_none() {
        eprintln!(
            "错误: 使用命令行模式时必须指定子命令 (tail、show-config 或 restart)"
        );
        eprintln!("使用 --help 查看详细帮助信息");
        std::process::exit(1);
    }

    // 处理命令行模式的子命令
    match args.command.unwrap() {
        Commands::Tail => {
            cli::run_tail(args.server).await?;
        }
        Commands::ShowConfig => {
            cli::run_show_config(args.server).await?;
        }
        Commands::Restart => {
            cli::run_restart(args.server).await?;
        }
    }

    Ok(())
}
