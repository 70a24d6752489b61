// ==========================================
// 钣喷维修成本引擎 - CSV 解析器
// ==========================================
// 输出: 每行一个 表头 → 值 的映射（已去除首尾空白）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 原始行（行号从 1 开始，表头行不计）
pub type RawRow = (usize, HashMap<String, String>);

/// 解析结果
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// 表头（小写）
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 文件
    pub fn parse_file(&self, path: &Path) -> ImportResult<ParsedCsv> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        self.parse_reader(file)
    }

    /// 解析内存中的 CSV 文本
    pub fn parse_str(&self, content: &str) -> ImportResult<ParsedCsv> {
        self.parse_reader(content.as_bytes())
    }

    fn parse_reader<R: Read>(&self, source: R) -> ImportResult<ParsedCsv> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(source);

        // 表头统一小写
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_map: HashMap<String, String> = record
                .iter()
                .enumerate()
                .filter_map(|(col_idx, value)| {
                    headers
                        .get(col_idx)
                        .map(|h| (h.clone(), value.trim().to_string()))
                })
                .collect();

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push((row_idx + 1, row_map));
        }

        Ok(ParsedCsv { headers, rows })
    }
}
