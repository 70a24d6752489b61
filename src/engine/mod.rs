// ==========================================
// 钣喷维修成本引擎 - 引擎层
// ==========================================
// 职责: 喷漆估价、配件拆单、比价、DRP 合规评分
// 红线: 引擎纯计算，不做 I/O；非法输入在计算前拒绝并指明字段
// ==========================================

pub mod cart_optimizer;
pub mod compliance;
pub mod error;
pub mod paint_estimator;
pub mod paint_time_table;
pub mod price_comparison;
pub mod supplier_price_table;

// 重导出核心引擎
pub use cart_optimizer::{optimize_cart, CartOptimizer};
pub use compliance::{calculate_compliance_score, ComplianceScorer};
pub use error::{EngineError, EngineResult};
pub use paint_estimator::{calculate_paint_estimate, PaintEstimator};
pub use paint_time_table::{all_panels, panel_profile};
pub use price_comparison::{compare_prices, PriceComparator, PriceComparison, RankedOffer};
pub use supplier_price_table::{PartRequest, SupplierPriceRecord, SupplierPriceTable};
