// ==========================================
// 钣喷维修成本引擎 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，映射为稳定的机器可读错误码
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 业务输入非法（指明字段）
    #[error("无效输入 ({field}): {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 请求 JSON 无法解析
    #[error("请求格式错误: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::MalformedRequest(_) => "MALFORMED_REQUEST",
        }
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput { field, reason } => ApiError::InvalidInput { field, reason },
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedRequest(err.to_string())
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
