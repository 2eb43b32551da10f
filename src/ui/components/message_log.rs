//! 消息日志组件
//!
//! 滚动展示解码消息缓冲，每次追加后视图保持跟随最新
//! 一条。

use eframe::egui;

use crate::core::log::message_log::MessageLog;

/// 渲染消息日志视图
pub fn render_message_log(
    ui: &mut egui::Ui,
    messages: &MessageLog,
) {
    ui.label(format!(
        "Received Messages ({})",
        messages.len()
    ));

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.weak("No messages received yet");
                return;
            }

            for entry in messages.iter() {
                ui.monospace(format!(
                    "[{}] {}",
                    entry
                        .received_at
                        .format("%H:%M:%S"),
                    entry.text
                ));
            }
        });
}
