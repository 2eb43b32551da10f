//! 状态面板组件
//!
//! 渲染全部主题的状态指示灯。系统错误通告使用醒目的
//! 独立条幅，且不影响其他主题的渲染。

use eframe::egui;

use crate::core::status::types::DisplayState;
use crate::ui::widgets::status::{
    severity_color, StatusLamp,
};

/// 渲染状态面板
pub fn render_status_panel(
    ui: &mut egui::Ui,
    display: &DisplayState,
) {
    egui::Grid::new("status_panel")
        .num_columns(3)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            StatusLamp::new(&display.system_status)
                .show(ui);
            StatusLamp::new(&display.transmission)
                .show(ui);
            StatusLamp::new(&display.reception)
                .show(ui);
            ui.end_row();

            StatusLamp::new(&display.udp_listener)
                .show(ui);
            StatusLamp::new(&display.carrier)
                .show(ui);
            StatusLamp::new(&display.wav_generation)
                .show(ui);
            ui.end_row();
        });

    if let Some(error) = &display.system_error {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(error.label.as_str())
                .color(severity_color(
                    error.severity,
                ))
                .strong(),
        );
    }
}
