// ==========================================
// 钣喷维修成本引擎 - 配件购物车领域模型
// ==========================================
// 职责: 购物车行 / 供应商报价 / 拆单结果
// 约束: 每个可采购行恰好出现在一个供应商订单中
// ==========================================

use crate::domain::paint::round_currency;
use crate::domain::types::UnfulfillableReason;
use serde::{Deserialize, Serialize};

// ==========================================
// SupplierOffer - 供应商报价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOffer {
    pub supplier_id: String,
    pub supplier_name: String,
    pub unit_price: f64,
    pub in_stock: bool,
    pub shipping_days: u32,
    /// 供应商单笔订单运费（未提供时使用配置的默认运费）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
}

// ==========================================
// CartLine - 购物车行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub part_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub offers: Vec<SupplierOffer>,
}

impl CartLine {
    /// 有库存的报价（保持输入顺序）
    pub fn in_stock_offers(&self) -> impl Iterator<Item = &SupplierOffer> {
        self.offers.iter().filter(|o| o.in_stock)
    }
}

// ==========================================
// OptimizedOrder - 单供应商订单
// ==========================================

/// 订单行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub part_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    pub shipping_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedOrder {
    pub supplier_id: String,
    pub supplier_name: String,
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
    /// 该订单所有行中最长的到货天数
    pub estimated_delivery_days: u32,
}

// ==========================================
// UnfulfillableLine - 无法采购的行（非致命告警）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfulfillableLine {
    pub part_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    pub quantity: u32,
    pub reason: UnfulfillableReason,
    /// 本地化原因说明
    pub reason_label: String,
}

// ==========================================
// OptimizationResult - 拆单优化结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub orders: Vec<OptimizedOrder>,
    pub unfulfillable: Vec<UnfulfillableLine>,
    /// 货款合计（不含运费、税）
    pub subtotal: f64,
    pub total_shipping: f64,
    pub total_tax: f64,
    pub total_cost: f64,
    /// 配件总件数（按数量累加，u64 避免大数量溢出）
    pub total_parts: u64,
    /// 每行都按最贵有库存报价购买时的货款合计
    pub worst_case_total: f64,
    pub savings_vs_worst_case: f64,
    pub savings_percentage: f64,
}

impl OptimizationResult {
    /// 订单中包含的行数
    pub fn assigned_line_count(&self) -> usize {
        self.orders.iter().map(|o| o.lines.len()).sum()
    }

    /// 查找某配件被分配到的供应商
    pub fn supplier_for(&self, part_id: &str) -> Option<&str> {
        self.orders
            .iter()
            .find(|o| o.lines.iter().any(|l| l.part_id == part_id))
            .map(|o| o.supplier_id.as_str())
    }

    /// 展示副本：金额保留两位小数
    pub fn rounded(&self) -> Self {
        Self {
            orders: self
                .orders
                .iter()
                .map(|o| OptimizedOrder {
                    lines: o
                        .lines
                        .iter()
                        .map(|l| OrderLine {
                            unit_price: round_currency(l.unit_price),
                            line_total: round_currency(l.line_total),
                            ..l.clone()
                        })
                        .collect(),
                    subtotal: round_currency(o.subtotal),
                    shipping: round_currency(o.shipping),
                    tax: round_currency(o.tax),
                    total: round_currency(o.total),
                    ..o.clone()
                })
                .collect(),
            subtotal: round_currency(self.subtotal),
            total_shipping: round_currency(self.total_shipping),
            total_tax: round_currency(self.total_tax),
            total_cost: round_currency(self.total_cost),
            worst_case_total: round_currency(self.worst_case_total),
            savings_vs_worst_case: round_currency(self.savings_vs_worst_case),
            savings_percentage: round_currency(self.savings_percentage),
            ..self.clone()
        }
    }
}
