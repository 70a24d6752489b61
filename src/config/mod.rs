// ==========================================
// 钣喷维修成本引擎 - 配置层
// ==========================================
// 职责: 引擎参数加载、校验、快照
// 存储: JSON（由应用外壳提供，内核不读环境变量）
// ==========================================

pub mod config_manager;
pub mod engine_config;
pub mod error;

// 重导出核心配置
pub use config_manager::ConfigManager;
pub use engine_config::{
    BlendPolicy, CartOptimizerConfig, ComplianceWeights, DeductionRule, EngineConfig,
    MaterialRates, PaintRateConfig, PaintTypeMultipliers,
};
pub use error::ConfigError;
