// ==========================================
// 钣喷维修成本引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 来源: JSON 字符串或 JSON 文件（缺省字段取默认值）
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::config::error::ConfigError;
use std::fs;
use std::path::Path;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: EngineConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 包装已有配置（会先校验）
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 从 JSON 字符串加载
    ///
    /// # 说明
    /// 只需提供与默认值不同的字段，例如:
    /// `{"paint": {"multipliers": {"triCoat": 2.0}}}`
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        Self::from_config(config)
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let manager = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "引擎配置已加载");
        Ok(manager)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 获取完整配置快照（JSON格式）
    ///
    /// # 用途
    /// - 随估价/拆单结果一起留档，保证结果可复算
    pub fn snapshot_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::engine_config::BlendPolicy;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let manager = ConfigManager::from_json_str(
            r#"{"paint": {"multipliers": {"triCoat": 2.0}, "blendPolicy": {"mode": "PAINT_TIME_RATIO", "value": 0.25}}}"#,
        )
        .unwrap();
        let config = manager.config();
        assert_eq!(config.paint.multipliers.tri_coat, 2.0);
        assert_eq!(config.paint.multipliers.metallic, 1.2);
        assert_eq!(config.paint.blend_policy, BlendPolicy::PaintTimeRatio(0.25));
        assert_eq!(config.cart.default_shipping_cost, 15.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        let manager = ConfigManager::from_json_str("{}").unwrap();
        assert_eq!(manager.config(), &EngineConfig::default());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = ConfigManager::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let result = ConfigManager::from_json_str(r#"{"compliance": {"auditOverduePoints": -5}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let manager = ConfigManager::new();
        let snapshot = manager.snapshot_json().unwrap();
        let restored = ConfigManager::from_json_str(&snapshot).unwrap();
        assert_eq!(restored.config(), manager.config());
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigManager::from_file("/nonexistent/engine.json");
        assert!(matches!(result, Err(ConfigError::FileReadError { .. })));
    }
}
