//! 状态相关组件
//!
//! 包含状态指示灯等与子系统状态显示相关的组件。

use eframe::egui;

use crate::core::status::types::{
    Severity, StatusDisplay,
};

/// 紧急程度对应的显示颜色
pub fn severity_color(
    severity: Severity,
) -> egui::Color32 {
    match severity {
        Severity::Nominal => egui::Color32::GREEN,
        Severity::Info => {
            egui::Color32::from_rgb(70, 130, 255)
        }
        Severity::Warn => egui::Color32::ORANGE,
        Severity::Alert => egui::Color32::RED,
        Severity::Neutral => egui::Color32::GRAY,
        Severity::Special => {
            egui::Color32::from_rgb(160, 80, 220)
        }
    }
}

/// 状态指示灯组件
///
/// 彩色圆点加投影标签，颜色由紧急程度决定。
pub struct StatusLamp<'a> {
    display: &'a StatusDisplay,
}

impl<'a> StatusLamp<'a> {
    /// 创建新的状态指示灯
    pub fn new(display: &'a StatusDisplay) -> Self {
        Self { display }
    }

    /// 渲染状态指示灯
    pub fn show(
        self,
        ui: &mut egui::Ui,
    ) -> egui::Response {
        let color =
            severity_color(self.display.severity);

        ui.horizontal(|ui| {
            let dot_radius = 4.0;
            let (rect, _) = ui.allocate_exact_size(
                egui::Vec2::splat(
                    dot_radius * 2.0 + 4.0,
                ),
                egui::Sense::hover(),
            );
            ui.painter().circle_filled(
                rect.center(),
                dot_radius,
                color,
            );

            ui.label(
                egui::RichText::new(
                    self.display.label.as_str(),
                )
                .color(color),
            );
        })
        .response
    }
}
