// ==========================================
// SupplierPriceImporter 集成测试
// ==========================================
// 测试目标: CSV 文件 → 价格表 → 购物车行
// ==========================================

use collision_cost_engine::engine::supplier_price_table::PartRequest;
use collision_cost_engine::importer::{ImportError, SupplierPriceImporter};
use std::io::Write;
use tempfile::NamedTempFile;

// ==========================================
// 测试辅助函数
// ==========================================

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

const HEADER: &str =
    "part_id,part_name,supplier_id,supplier_name,unit_price,in_stock,shipping_days,shipping_cost";

#[test]
fn test_import_file_builds_cart() {
    println!("\n=== 测试：CSV 导入并生成购物车 ===");

    let file = write_csv(&[
        HEADER,
        "BMP-F,Front Bumper Cover,S1,LKQ,189.99,true,3,",
        "BMP-F,Front Bumper Cover,S2,Keystone,175.50,TRUE,5,18.5",
        "",
        "MIR-L,Mirror Cover,S1,LKQ,32,no,2,",
    ]);
    let table = SupplierPriceImporter::new().import_file(file.path()).unwrap();
    println!("  - 配件数: {}", table.len());
    assert_eq!(table.len(), 2);

    let cart = table.build_cart(&[PartRequest::new("BMP-F", 1), PartRequest::new("MIR-L", 2)]);
    assert_eq!(cart[0].part_name.as_deref(), Some("Front Bumper Cover"));
    assert_eq!(cart[0].offers.len(), 2);
    assert_eq!(cart[0].offers[1].shipping_cost, Some(18.5));
    assert!(cart[0].offers[1].in_stock);
    assert!(!cart[1].offers[0].in_stock);
    assert_eq!(cart[1].quantity, 2);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_headers_case_insensitive() {
    let file = write_csv(&[
        "Part_ID,Supplier_ID,Supplier_Name,Unit_Price,In_Stock,Shipping_Days",
        "p1,S1,A,10,1,2",
    ]);
    let table = SupplierPriceImporter::new().import_file(file.path()).unwrap();
    assert_eq!(table.offers_for("p1").len(), 1);
}

#[test]
fn test_missing_required_value() {
    let file = write_csv(&[HEADER, "p1,,,A,10,true,2,"]);
    let err = SupplierPriceImporter::new().import_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::MissingValue { row: 1, ref field } if field == "supplier_id"));
}

#[test]
fn test_bad_shipping_days() {
    let file = write_csv(&[HEADER, "p1,,S1,A,10,true,-2,"]);
    let err = SupplierPriceImporter::new().import_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::TypeConversionError { ref field, .. } if field == "shipping_days"));
}

#[test]
fn test_unsupported_extension() {
    let mut file = NamedTempFile::with_suffix(".xlsx").unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    let err = SupplierPriceImporter::new().import_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(_)));
}
