// ==========================================
// 钣喷维修成本引擎 - 导入层
// ==========================================
// 职责: 外部数据导入（供应商价格 CSV）
// ==========================================

pub mod error;
pub mod file_parser;
pub mod supplier_price_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ParsedCsv};
pub use supplier_price_importer::SupplierPriceImporter;
