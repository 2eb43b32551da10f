//! GUI主应用程序模块

use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::app::error::types::{AppError, Result};
use crate::app::settings::manager::SettingsManager;
use crate::core::api::client::ApiClient;
use crate::core::schema::form::FormState;
use crate::core::schema::validator::DocumentValidator;
use crate::core::services::console_service::{
    ConsoleService, UiMessage,
};
use crate::core::status::board::StatusBoard;
use crate::utils::helpers::normalize_server_url;

use super::components::{
    render_config_form, render_control_bar,
    render_message_log, render_status_panel, Feedback,
    UserAction,
};

/// GUI 应用程序
pub struct ConsoleApp {
    service: ConsoleService,
    rx: mpsc::UnboundedReceiver<UiMessage>,
    // 事件路由与投影状态
    board: StatusBoard,
    // 配置表单编辑状态
    form: FormState,
    form_loaded: bool,
    latest_fetch: u64,
    // 命令进行中标记
    submit_busy: bool,
    restart_busy: bool,
    feedback: Option<Feedback>,
    channel_down: Option<String>,
}

impl ConsoleApp {
    /// 创建应用实例并启动后台任务
    pub fn new(
        server_override: Option<String>,
        runtime_handle: tokio::runtime::Handle,
    ) -> Result<Self> {
        let mut settings_manager =
            SettingsManager::new()?;

        // 尝试加载设置，失败则使用默认设置
        if let Err(e) = settings_manager.load() {
            tracing::warn!(
                "Failed to load settings file, using defaults: {}",
                e
            );
        }

        let mut settings =
            settings_manager.settings().clone();
        if let Some(url) = server_override {
            settings.server_url = url;
        }

        let server_url =
            normalize_server_url(&settings.server_url)?;
        let api_client = ApiClient::new(
            &server_url,
            Duration::from_secs(
                settings.request_timeout_secs,
            ),
        )?;

        let (tx, rx) = mpsc::unbounded_channel();
        let mut service = ConsoleService::new(
            api_client,
            runtime_handle,
            tx,
        );

        service.start_event_channel();
        let latest_fetch = service.fetch_config();

        Ok(Self {
            service,
            rx,
            board: StatusBoard::new(),
            form: FormState::empty(),
            form_loaded: false,
            latest_fetch,
            submit_busy: false,
            restart_busy: false,
            feedback: None,
            channel_down: None,
        })
    }

    /// 排空 UI 通道
    ///
    /// 每条消息处理到完成后才取下一条，到达顺序即
    /// 处理顺序。
    fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.apply_message(message);
        }
    }

    fn apply_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::Server(event) => {
                self.board.handle_event(event);
            }
            UiMessage::ConfigFetched {
                seq,
                result,
            } => {
                // 只应用最近一次派发的拉取，过期响应直接丢弃
                if seq != self.latest_fetch {
                    tracing::debug!(
                        "Discarding stale config fetch #{}",
                        seq
                    );
                    return;
                }
                match result {
                    Ok(doc) => {
                        self.form =
                            FormState::from_document(
                                &doc,
                            );
                        self.form_loaded = true;
                    }
                    Err(e) => {
                        // 拉取失败不致命：表单留空，等用户重试
                        tracing::error!(
                            "Failed to fetch configuration: {}",
                            e
                        );
                    }
                }
            }
            UiMessage::SubmitDone { result } => {
                self.submit_busy = false;
                match result {
                    Ok(message) => {
                        self.feedback = Some(
                            Feedback::Success(message),
                        );
                        // 保存成功后以服务端确认状态刷新表单
                        self.latest_fetch = self
                            .service
                            .fetch_config();
                    }
                    Err(e) => {
                        // 提交失败保留用户未保存的编辑
                        self.feedback = Some(
                            Feedback::Error(
                                e.to_string(),
                            ),
                        );
                    }
                }
            }
            UiMessage::RestartDone { result } => {
                self.restart_busy = false;
                self.feedback = Some(match result {
                    Ok(message) => {
                        Feedback::Success(message)
                    }
                    Err(e) => Feedback::Error(
                        e.to_string(),
                    ),
                });
            }
            UiMessage::ChannelDown { reason } => {
                self.channel_down = Some(reason);
            }
        }
    }

    fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::SaveConfig => {
                self.save_config();
            }
            UserAction::RestartReception => {
                self.restart_busy = true;
                self.feedback = None;
                self.service.restart_reception();
            }
            UserAction::ReloadConfig => {
                self.latest_fetch =
                    self.service.fetch_config();
            }
            UserAction::None => {}
        }
    }

    /// 收集并提交表单
    fn save_config(&mut self) {
        let doc = match self.form.collect() {
            Ok(doc) => doc,
            Err(e) => {
                self.feedback = Some(
                    Feedback::Error(e.to_string()),
                );
                return;
            }
        };

        if let Err(e) =
            DocumentValidator::validate_document(&doc)
        {
            self.feedback =
                Some(Feedback::Error(e.to_string()));
            return;
        }

        self.submit_busy = true;
        self.feedback = None;
        self.service.submit_config(doc);
    }
}

impl eframe::App for ConsoleApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        self.drain_messages();

        // 状态面板区域
        egui::TopBottomPanel::top("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                render_status_panel(
                    ui,
                    &self.board.display,
                );

                if let Some(reason) =
                    &self.channel_down
                {
                    ui.colored_label(
                        egui::Color32::ORANGE,
                        format!(
                            "Event channel down: {}",
                            reason
                        ),
                    );
                }

                // 服务端重启通告，手动关闭
                let mut dismissed = false;
                if let Some(notice) =
                    &self.board.notice
                {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            egui::Color32::ORANGE,
                            notice.as_str(),
                        );
                        dismissed = ui
                            .small_button("Dismiss")
                            .clicked();
                    });
                }
                if dismissed {
                    self.board.notice = None;
                }
                ui.add_space(8.0);
            });

        // 配置表单区域
        egui::SidePanel::left("config_panel")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Configuration");
                if !self.form_loaded {
                    ui.weak(
                        "Configuration not loaded",
                    );
                }
                render_config_form(
                    ui,
                    &mut self.form,
                );
                ui.add_space(8.0);

                let action = render_control_bar(
                    ui,
                    self.submit_busy,
                    self.restart_busy,
                    &self.feedback,
                );
                self.handle_action(action);
            });

        // 消息日志区域
        egui::CentralPanel::default().show(
            ctx,
            |ui| {
                render_message_log(
                    ui,
                    &self.board.messages,
                );
            },
        );

        // 定期刷新界面以接收后台消息
        ctx.request_repaint_after(
            Duration::from_millis(100),
        );
    }
}

/// 启动 GUI 应用程序
pub fn run_gui(
    server_override: Option<String>,
) -> Result<()> {
    let viewport_builder =
        egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([720.0, 480.0])
            .with_resizable(true)
            .with_title("APRS Console");

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        hardware_acceleration:
            eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    // 获取当前的 tokio runtime handle
    let runtime_handle =
        tokio::runtime::Handle::current();

    eframe::run_native(
        "APRS Console",
        options,
        Box::new(move |_cc| {
            let app = ConsoleApp::new(
                server_override,
                runtime_handle,
            )?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| {
        tracing::error!("GUI startup failed: {}", e);
        AppError::Gui(e.to_string())
    })?;

    Ok(())
}
