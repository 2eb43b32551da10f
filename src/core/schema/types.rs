use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 表单字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 数值字段（按浮点数解析）
    Number,
    /// 文本字段（提交时去除首尾空白）
    Text,
    /// 布尔开关字段
    Boolean,
}

/// 表单字段声明
///
/// 表单渲染的字段集合是静态声明的，见
/// [`super::schema::CONFIG_SCHEMA`]。
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// 配置文档中的键名
    pub key: &'static str,
    /// 表单显示标签
    pub label: &'static str,
    /// 字段类型
    pub kind: FieldKind,
}

/// 配置字段值（JSON 标量）
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum FieldValue {
    /// 布尔值
    Boolean(bool),
    /// 数值
    Number(f64),
    /// 文本
    Text(String),
}

impl FieldValue {
    /// 按数值读取
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 按文本读取
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 按布尔值读取
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// 服务端持有的配置文档
///
/// 键到标量值的映射。文档由服务端拉取创建，本地编辑
/// 修改，提交成功后整体被服务端确认状态取代。文档中
/// 不在表单模式内的键会被表单忽略，但在文档里原样
/// 保留。
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ConfigDocument {
    fields: BTreeMap<String, FieldValue>,
}

impl ConfigDocument {
    /// 创建空文档
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取字段值
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// 写入字段值
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: FieldValue,
    ) {
        self.fields.insert(key.into(), value);
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 文档是否为空
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 遍历全部字段
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&String, &FieldValue)>
    {
        self.fields.iter()
    }
}
