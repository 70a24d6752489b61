// ==========================================
// 钣喷维修成本引擎 - 供应商价格表
// ==========================================
// 职责: 按配件归集供应商报价，生成购物车行
// 来源: importer::SupplierPriceImporter（CSV）或调用方直接构造
// ==========================================

use crate::domain::cart::{CartLine, SupplierOffer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 价格表中的一条记录（一个配件在一个供应商处的报价）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPriceRecord {
    pub part_id: String,
    #[serde(default)]
    pub part_name: Option<String>,
    pub supplier_id: String,
    pub supplier_name: String,
    pub unit_price: f64,
    pub in_stock: bool,
    pub shipping_days: u32,
    #[serde(default)]
    pub shipping_cost: Option<f64>,
}

impl SupplierPriceRecord {
    fn to_offer(&self) -> SupplierOffer {
        SupplierOffer {
            supplier_id: self.supplier_id.clone(),
            supplier_name: self.supplier_name.clone(),
            unit_price: self.unit_price,
            in_stock: self.in_stock,
            shipping_days: self.shipping_days,
            shipping_cost: self.shipping_cost,
        }
    }
}

/// 采购需求（配件 + 数量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRequest {
    pub part_id: String,
    pub quantity: u32,
}

impl PartRequest {
    pub fn new(part_id: &str, quantity: u32) -> Self {
        Self {
            part_id: part_id.to_string(),
            quantity,
        }
    }
}

// ==========================================
// SupplierPriceTable - 供应商价格表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SupplierPriceTable {
    // part_id -> 报价记录（保持导入顺序）
    records: HashMap<String, Vec<SupplierPriceRecord>>,
}

impl SupplierPriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = SupplierPriceRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// 插入报价；同一配件同一供应商重复出现时以后者为准
    pub fn insert(&mut self, record: SupplierPriceRecord) {
        let entries = self.records.entry(record.part_id.clone()).or_default();
        match entries
            .iter_mut()
            .find(|r| r.supplier_id == record.supplier_id)
        {
            Some(existing) => *existing = record,
            None => entries.push(record),
        }
    }

    /// 配件数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn offers_for(&self, part_id: &str) -> Vec<SupplierOffer> {
        self.records
            .get(part_id)
            .map(|records| records.iter().map(SupplierPriceRecord::to_offer).collect())
            .unwrap_or_default()
    }

    pub fn part_name(&self, part_id: &str) -> Option<String> {
        self.records
            .get(part_id)?
            .iter()
            .find_map(|r| r.part_name.clone())
    }

    /// 生成购物车行
    ///
    /// 价格表中不存在的配件生成无报价的行，由拆单引擎上报为无法采购
    pub fn build_cart(&self, requests: &[PartRequest]) -> Vec<CartLine> {
        requests
            .iter()
            .map(|req| CartLine {
                part_id: req.part_id.clone(),
                part_name: self.part_name(&req.part_id),
                quantity: req.quantity,
                offers: self.offers_for(&req.part_id),
            })
            .collect()
    }
}
