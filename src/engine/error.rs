// ==========================================
// 钣喷维修成本引擎 - 引擎层错误类型
// ==========================================
// 红线: 非法输入在计算开始前拒绝，错误信息必须指出字段
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("无效输入 ({field}): {reason}")]
    InvalidInput { field: String, reason: String },
}

impl EngineError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 出错字段
    pub fn field(&self) -> &str {
        match self {
            EngineError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

/// 校验数值为有限且非负
pub(crate) fn ensure_non_negative(field: impl Into<String>, value: f64) -> EngineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::invalid_input(
            field,
            format!("必须为非负数，实际 {}", value),
        ));
    }
    Ok(())
}
