// ==========================================
// 钣喷维修成本引擎 - API 层
// ==========================================
// 职责: 请求对象解析、错误码映射、JSON 信封
// ==========================================

pub mod cart_api;
pub mod compliance_api;
pub mod dto;
pub mod error;
pub mod handler;
pub mod paint_api;

// 重导出核心类型
pub use cart_api::CartApi;
pub use compliance_api::ComplianceApi;
pub use dto::{
    ComparePricesRequest, ComplianceRequest, OptimizeCartRequest, PaintEstimateRequest,
    PanelSelection, PriceTableCartRequest,
};
pub use error::{ApiError, ApiResult};
pub use handler::{
    handle_compare_prices, handle_compliance_score, handle_optimize_cart, handle_paint_estimate,
    RequestHandler,
};
pub use paint_api::PaintEstimateApi;
