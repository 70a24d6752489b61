// ==========================================
// 钣喷维修成本引擎 - 供应商价格导入器
// ==========================================
// 流程: CSV 解析 → 列校验 → 字段映射/类型转换 → 价格表
// 列: part_id, part_name, supplier_id, supplier_name, unit_price,
//     in_stock, shipping_days, shipping_cost
// ==========================================

use crate::engine::supplier_price_table::{SupplierPriceRecord, SupplierPriceTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, ParsedCsv};
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

/// 必需列
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "part_id",
    "supplier_id",
    "supplier_name",
    "unit_price",
    "in_stock",
    "shipping_days",
];

pub struct SupplierPriceImporter;

impl SupplierPriceImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从文件导入
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn import_file(&self, path: &Path) -> ImportResult<SupplierPriceTable> {
        let parsed = CsvParser.parse_file(path)?;
        self.build_table(parsed)
    }

    /// 从 CSV 文本导入
    pub fn import_str(&self, content: &str) -> ImportResult<SupplierPriceTable> {
        let parsed = CsvParser.parse_str(content)?;
        self.build_table(parsed)
    }

    fn build_table(&self, parsed: ParsedCsv) -> ImportResult<SupplierPriceTable> {
        for column in REQUIRED_COLUMNS {
            if !parsed.headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }

        let records = parsed
            .rows
            .iter()
            .map(|(row_number, row)| self.map_row(row, *row_number))
            .collect::<ImportResult<Vec<_>>>()?;

        tracing::info!(records = records.len(), "供应商价格导入完成");
        Ok(SupplierPriceTable::from_records(records))
    }

    // ==========================================
    // 字段映射
    // ==========================================

    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<SupplierPriceRecord> {
        let unit_price = self.require_f64(row, "unit_price", row_number)?;
        let shipping_cost = self.parse_f64(row, "shipping_cost", row_number)?;
        if let Some(cost) = shipping_cost {
            self.ensure_non_negative("shipping_cost", cost, row_number)?;
        }
        self.ensure_non_negative("unit_price", unit_price, row_number)?;

        Ok(SupplierPriceRecord {
            part_id: self.require_string(row, "part_id", row_number)?,
            part_name: self.get_string(row, "part_name"),
            supplier_id: self.require_string(row, "supplier_id", row_number)?,
            supplier_name: self.require_string(row, "supplier_name", row_number)?,
            unit_price,
            in_stock: self.parse_bool(row, "in_stock", row_number)?,
            shipping_days: self.parse_u32(row, "shipping_days", row_number)?,
            shipping_cost,
        })
    }

    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn require_string(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<String> {
        self.get_string(row, key)
            .ok_or_else(|| ImportError::MissingValue {
                row: row_number,
                field: key.to_string(),
            })
    }

    /// 解析浮点数（空值返回 None）
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为数值: {}", value),
                }),
        }
    }

    fn require_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        self.parse_f64(row, key, row_number)?
            .ok_or_else(|| ImportError::MissingValue {
                row: row_number,
                field: key.to_string(),
            })
    }

    fn parse_u32(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<u32> {
        let value = self.require_string(row, key, row_number)?;
        value
            .parse::<u32>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为非负整数: {}", value),
            })
    }

    /// 布尔值: true/false, yes/no, y/n, 1/0（大小写不敏感）
    fn parse_bool(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<bool> {
        let value = self.require_string(row, key, row_number)?;
        match value.to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" => Ok(false),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为布尔值: {}", value),
            }),
        }
    }

    fn ensure_non_negative(&self, field: &str, value: f64, row_number: usize) -> ImportResult<()> {
        if value < 0.0 {
            return Err(ImportError::NegativeValue {
                row: row_number,
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }
}

impl Default for SupplierPriceImporter {
    fn default() -> Self {
        Self::new()
    }
}
