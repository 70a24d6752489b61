// ==========================================
// 钣喷维修成本引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含计算逻辑,不含 I/O
// ==========================================

pub mod cart;
pub mod drp;
pub mod paint;
pub mod types;

// 重导出核心类型
pub use cart::{
    CartLine, OptimizationResult, OptimizedOrder, OrderLine, SupplierOffer, UnfulfillableLine,
};
pub use drp::{ComplianceDeduction, ComplianceScore, DrpProgramSnapshot, ProgramRequirement};
pub use paint::{
    round_currency, MaterialCostBreakdown, PaintCostResult, PaintJobRequest, PanelCostBreakdown,
    PanelPaintProfile,
};
pub use types::{ComplianceStatus, DeductionKind, PaintType, UnfulfillableReason};
