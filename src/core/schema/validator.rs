//! 配置文档验证模块
//!
//! 提交前的客户端校验，与服务端的必填字段检查保持
//! 一致

use crate::app::error::types::{AppError, Result};

use super::schema::{
    field_spec, MANDATORY_TEXT_FIELDS,
};
use super::types::ConfigDocument;

/// 配置文档验证器
pub struct DocumentValidator;

impl DocumentValidator {
    /// 验证待提交的配置文档
    pub fn validate_document(
        doc: &ConfigDocument,
    ) -> Result<()> {
        for key in MANDATORY_TEXT_FIELDS {
            let label = field_spec(key)
                .map(|spec| spec.label)
                .unwrap_or(key);

            let present = doc
                .get(key)
                .and_then(|value| value.as_text())
                .map(|text| !text.is_empty())
                .unwrap_or(false);

            if !present {
                return Err(AppError::validation(
                    label,
                    "field cannot be empty",
                ));
            }
        }

        Ok(())
    }
}
