//! 命令栏组件
//!
//! 渲染保存/重启/刷新按钮和最近一次命令的反馈条。
//! 按钮只产生用户动作，命令派发由应用层完成。

use eframe::egui;

/// 用户动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// 无动作
    None,
    /// 提交当前表单
    SaveConfig,
    /// 重启接收
    RestartReception,
    /// 重新拉取服务端配置
    ReloadConfig,
}

/// 命令执行反馈
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// 命令成功，附服务端确认说明
    Success(String),
    /// 命令失败或被校验拒绝
    Error(String),
}

/// 渲染命令栏
pub fn render_control_bar(
    ui: &mut egui::Ui,
    submit_busy: bool,
    restart_busy: bool,
    feedback: &Option<Feedback>,
) -> UserAction {
    let mut action = UserAction::None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                !submit_busy,
                egui::Button::new(
                    "Save Configuration",
                ),
            )
            .clicked()
        {
            action = UserAction::SaveConfig;
        }

        if ui
            .add_enabled(
                !restart_busy,
                egui::Button::new(
                    "Restart Reception",
                ),
            )
            .clicked()
        {
            action = UserAction::RestartReception;
        }

        if ui.button("Reload").clicked() {
            action = UserAction::ReloadConfig;
        }

        if submit_busy || restart_busy {
            ui.spinner();
        }
    });

    if let Some(feedback) = feedback {
        ui.add_space(4.0);
        match feedback {
            Feedback::Success(message) => {
                ui.colored_label(
                    egui::Color32::GREEN,
                    message.as_str(),
                );
            }
            Feedback::Error(message) => {
                ui.colored_label(
                    egui::Color32::RED,
                    message.as_str(),
                );
            }
        }
    }

    action
}
