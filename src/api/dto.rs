// ==========================================
// 钣喷维修成本引擎 - API 请求对象
// ==========================================

use crate::domain::cart::CartLine;
use crate::domain::drp::DrpProgramSnapshot;
use crate::domain::paint::PanelPaintProfile;
use crate::engine::supplier_price_table::PartRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 拆单请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeCartRequest {
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub tax_rate: f64,
}

/// 按供应商价格表拆单的请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTableCartRequest {
    pub requests: Vec<PartRequest>,
    #[serde(default)]
    pub tax_rate: f64,
}

/// 面板选择: 工时表中的面板名，或完整的工时档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelSelection {
    Name(String),
    Profile(PanelPaintProfile),
}

/// 喷漆估价请求
///
/// `paintType` 以字符串接收，非法取值报告为 INVALID_INPUT 而不是格式错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintEstimateRequest {
    pub panels: Vec<PanelSelection>,
    pub paint_type: String,
    pub labor_rate: f64,
    #[serde(default)]
    pub include_blend: bool,
}

/// 合规评分请求（KPI 快照 + 可选评估日期，缺省为今天）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    #[serde(flatten)]
    pub program: DrpProgramSnapshot,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// 比价请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparePricesRequest {
    pub item: CartLine,
    /// 缺省运费；不传则使用配置值
    #[serde(default)]
    pub default_shipping: Option<f64>,
}
