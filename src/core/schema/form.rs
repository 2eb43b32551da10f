//! 表单编辑状态
//!
//! 表单的逻辑状态与渲染层分离：这里只保存每个控件的
//! 编辑缓冲，GUI 层是其上的一层薄渲染。数值字段以文本
//! 缓冲保存，非法输入保留到提交时统一报告，不做静默
//! 归零。

use crate::app::error::types::{ConsoleError, Result};
use crate::utils::helpers::format_number;

use super::schema::CONFIG_SCHEMA;
use super::types::{
    ConfigDocument, FieldKind, FieldSpec, FieldValue,
};

/// 单个表单控件的编辑状态
#[derive(Debug, Clone)]
pub struct FieldInput {
    /// 字段声明
    pub spec: &'static FieldSpec,
    /// 数值/文本字段的编辑缓冲
    pub buffer: String,
    /// 布尔字段的开关状态
    pub checked: bool,
}

impl FieldInput {
    fn unset(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            buffer: String::new(),
            checked: false,
        }
    }
}

/// 配置表单的编辑状态
///
/// 控件集合与 [`CONFIG_SCHEMA`] 一一对应，按声明顺序
/// 排列。
#[derive(Debug, Clone)]
pub struct FormState {
    /// 控件列表，模式声明顺序
    pub fields: Vec<FieldInput>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::empty()
    }
}

impl FormState {
    /// 创建未填充的表单
    pub fn empty() -> Self {
        Self {
            fields: CONFIG_SCHEMA
                .iter()
                .map(FieldInput::unset)
                .collect(),
        }
    }

    /// 从配置文档构建表单
    ///
    /// 文档中缺失的键对应控件留空；文档中模式之外的键
    /// 被忽略。
    pub fn from_document(doc: &ConfigDocument) -> Self {
        let fields = CONFIG_SCHEMA
            .iter()
            .map(|spec| {
                let mut input = FieldInput::unset(spec);
                let Some(value) = doc.get(spec.key)
                else {
                    return input;
                };

                match spec.kind {
                    FieldKind::Number => {
                        input.buffer =
                            match value.as_number() {
                                Some(n) => {
                                    format_number(n)
                                }
                                // 类型不符时按原文呈现，交给提交校验
                                None => value
                                    .as_text()
                                    .unwrap_or_default()
                                    .to_string(),
                            };
                    }
                    FieldKind::Text => {
                        input.buffer = value
                            .as_text()
                            .unwrap_or_default()
                            .to_string();
                    }
                    FieldKind::Boolean => {
                        input.checked = value
                            .as_boolean()
                            .unwrap_or(false);
                    }
                }
                input
            })
            .collect();

        Self { fields }
    }

    /// 读取所有控件值，按声明类型转换为配置文档
    ///
    /// 数值字段按浮点数解析，空白或无法解析的输入返回
    /// 指明字段的验证错误；文本字段去除首尾空白；布尔
    /// 字段读取开关状态。
    pub fn collect(&self) -> Result<ConfigDocument> {
        let mut doc = ConfigDocument::new();

        for input in &self.fields {
            let spec = input.spec;
            match spec.kind {
                FieldKind::Number => {
                    let raw = input.buffer.trim();
                    if raw.is_empty() {
                        return Err(
                            ConsoleError::validation(
                                spec.label,
                                "value is required",
                            ),
                        );
                    }
                    let parsed =
                        raw.parse::<f64>().map_err(
                            |_| {
                                ConsoleError::validation(
                                    spec.label,
                                    "not a valid number",
                                )
                            },
                        )?;
                    if !parsed.is_finite() {
                        return Err(
                            ConsoleError::validation(
                                spec.label,
                                "not a valid number",
                            ),
                        );
                    }
                    doc.set(
                        spec.key,
                        FieldValue::Number(parsed),
                    );
                }
                FieldKind::Text => {
                    doc.set(
                        spec.key,
                        FieldValue::Text(
                            input
                                .buffer
                                .trim()
                                .to_string(),
                        ),
                    );
                }
                FieldKind::Boolean => {
                    doc.set(
                        spec.key,
                        FieldValue::Boolean(
                            input.checked,
                        ),
                    );
                }
            }
        }

        Ok(doc)
    }

    /// 按键名查找控件（测试与 GUI 共用）
    pub fn field_mut(
        &mut self,
        key: &str,
    ) -> Option<&mut FieldInput> {
        self.fields
            .iter_mut()
            .find(|input| input.spec.key == key)
    }
}
