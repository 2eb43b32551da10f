//! 配置表单组件
//!
//! 按模式声明顺序为每个字段渲染一行带标签的控件。
//! 数值字段使用文本编辑框而不是数字控件，非法输入
//! 原样保留，提交时统一校验报告。

use eframe::egui;

use crate::core::schema::form::FormState;
use crate::core::schema::types::FieldKind;

/// 渲染配置表单
pub fn render_config_form(
    ui: &mut egui::Ui,
    form: &mut FormState,
) {
    egui::Grid::new("config_form")
        .num_columns(2)
        .min_col_width(120.0)
        .spacing([20.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for input in &mut form.fields {
                ui.label(input.spec.label);
                match input.spec.kind {
                    FieldKind::Number
                    | FieldKind::Text => {
                        ui.text_edit_singleline(
                            &mut input.buffer,
                        );
                    }
                    FieldKind::Boolean => {
                        ui.checkbox(
                            &mut input.checked,
                            "",
                        );
                    }
                }
                ui.end_row();
            }
        });
}
