//! 配置模式模块
//!
//! 定义配置表单的静态模式、配置文档类型和表单编辑
//! 状态

pub mod form;
pub mod schema;
/// 配置文档类型定义
pub mod types;
pub mod validator;

pub use form::{FieldInput, FormState};
pub use schema::{field_spec, CONFIG_SCHEMA};
pub use types::{
    ConfigDocument, FieldKind, FieldSpec, FieldValue,
};
pub use validator::DocumentValidator;
