// ==========================================
// 钣喷维修成本引擎 - 核心库
// ==========================================
// 功能: 喷漆估价 / 配件采购拆单优化 / DRP 合规评分
// 定位: 纯计算库，无 I/O（导入层与二进制除外）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 费率与权重
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 请求解析与响应信封
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ComplianceStatus, DeductionKind, PaintType, UnfulfillableReason};

// 领域实体
pub use domain::{
    CartLine, ComplianceScore, DrpProgramSnapshot, OptimizationResult, PaintCostResult,
    PaintJobRequest, PanelPaintProfile, SupplierOffer,
};

// 引擎
pub use engine::{
    calculate_compliance_score, calculate_paint_estimate, compare_prices, optimize_cart,
    CartOptimizer, ComplianceScorer, EngineError, PaintEstimator, PriceComparator,
    SupplierPriceTable,
};

// 配置
pub use config::{ConfigManager, EngineConfig};

// API
pub use api::{ApiError, CartApi, ComplianceApi, PaintEstimateApi, RequestHandler};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "钣喷维修成本引擎";
