//! 配置表单模式
//!
//! 表单渲染的字段集合是固定的静态声明，顺序即渲染
//! 顺序。键名与服务端配置文档保持一致。

use super::types::{FieldKind, FieldSpec};

/// 配置表单的 11 个字段，按渲染顺序排列
pub static CONFIG_SCHEMA: [FieldSpec; 11] = [
    FieldSpec {
        key: "frequency_hz",
        label: "Frequency (Hz)",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "gain",
        label: "Gain",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "if_gain",
        label: "IF Gain",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "callsign_source",
        label: "Source Callsign",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "callsign_dest",
        label: "Destination Callsign",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "flags_before",
        label: "Flags Before",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "flags_after",
        label: "Flags After",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "send_ip",
        label: "Send IP",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "send_port",
        label: "Send Port",
        kind: FieldKind::Number,
    },
    FieldSpec {
        key: "carrier_only",
        label: "Carrier Only",
        kind: FieldKind::Boolean,
    },
    FieldSpec {
        key: "device_index",
        label: "Device Index",
        kind: FieldKind::Number,
    },
];

/// 提交时必须非空的文本字段，与服务端校验一致
pub const MANDATORY_TEXT_FIELDS: [&str; 3] =
    ["callsign_source", "callsign_dest", "send_ip"];

/// 按键名查找字段声明
pub fn field_spec(
    key: &str,
) -> Option<&'static FieldSpec> {
    CONFIG_SCHEMA.iter().find(|spec| spec.key == key)
}
