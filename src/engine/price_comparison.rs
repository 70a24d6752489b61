// ==========================================
// 钣喷维修成本引擎 - 单配件比价
// ==========================================
// 输入: 一个购物车行
// 输出: 有库存报价按到手成本排序 + 最低价/最快到货供应商 + 价差
// ==========================================

use crate::config::engine_config::CartOptimizerConfig;
use crate::domain::cart::CartLine;
use serde::{Deserialize, Serialize};

/// 排序后的报价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOffer {
    pub supplier_id: String,
    pub supplier_name: String,
    pub unit_price: f64,
    /// 单价 × 数量
    pub line_cost: f64,
    /// 单独下单的运费
    pub shipping_cost: f64,
    /// 到手成本 = 货款 + 运费
    pub landed_cost: f64,
    pub shipping_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub part_id: String,
    pub quantity: u32,
    pub offers: Vec<RankedOffer>,
    pub best_price_supplier_id: Option<String>,
    pub fastest_supplier_id: Option<String>,
    /// 最高单价 - 最低单价（有库存报价）
    pub price_spread: f64,
    pub out_of_stock_count: usize,
}

// ==========================================
// PriceComparator - 比价引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PriceComparator {
    config: CartOptimizerConfig,
}

impl PriceComparator {
    pub fn new(config: CartOptimizerConfig) -> Self {
        Self { config }
    }

    /// 单配件比价
    ///
    /// 排序键: 到手成本升序 → 到货天数升序 → 输入顺序
    pub fn compare(&self, line: &CartLine) -> PriceComparison {
        let quantity = f64::from(line.quantity);

        let mut offers: Vec<RankedOffer> = line
            .in_stock_offers()
            .map(|o| {
                let line_cost = o.unit_price * quantity;
                let shipping_cost = o.shipping_cost.unwrap_or(self.config.default_shipping_cost);
                RankedOffer {
                    supplier_id: o.supplier_id.clone(),
                    supplier_name: o.supplier_name.clone(),
                    unit_price: o.unit_price,
                    line_cost,
                    shipping_cost,
                    landed_cost: line_cost + shipping_cost,
                    shipping_days: o.shipping_days,
                }
            })
            .collect();
        offers.sort_by(|a, b| {
            a.landed_cost
                .total_cmp(&b.landed_cost)
                .then_with(|| a.shipping_days.cmp(&b.shipping_days))
        });

        let best_price_supplier_id = offers
            .iter()
            .min_by(|a, b| a.unit_price.total_cmp(&b.unit_price))
            .map(|o| o.supplier_id.clone());
        let fastest_supplier_id = offers
            .iter()
            .min_by_key(|o| o.shipping_days)
            .map(|o| o.supplier_id.clone());

        let max_price = offers.iter().map(|o| o.unit_price).fold(f64::NEG_INFINITY, f64::max);
        let min_price = offers.iter().map(|o| o.unit_price).fold(f64::INFINITY, f64::min);
        let price_spread = if offers.is_empty() { 0.0 } else { max_price - min_price };

        PriceComparison {
            part_id: line.part_id.clone(),
            quantity: line.quantity,
            best_price_supplier_id,
            fastest_supplier_id,
            price_spread,
            out_of_stock_count: line.offers.len() - offers.len(),
            offers,
        }
    }
}

/// 以指定缺省运费比价
pub fn compare_prices(line: &CartLine, default_shipping: f64) -> PriceComparison {
    PriceComparator::new(CartOptimizerConfig {
        default_shipping_cost: default_shipping,
        ..CartOptimizerConfig::default()
    })
    .compare(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::SupplierOffer;

    fn offer(supplier: &str, price: f64, in_stock: bool, days: u32, shipping: Option<f64>) -> SupplierOffer {
        SupplierOffer {
            supplier_id: supplier.to_string(),
            supplier_name: supplier.to_string(),
            unit_price: price,
            in_stock,
            shipping_days: days,
            shipping_cost: shipping,
        }
    }

    #[test]
    fn test_ranked_by_landed_cost() {
        let line = CartLine {
            part_id: "p1".to_string(),
            part_name: None,
            quantity: 2,
            offers: vec![
                offer("A", 10.0, true, 1, Some(30.0)), // 50
                offer("B", 12.0, true, 4, Some(0.0)),  // 24
                offer("C", 9.0, true, 6, None),        // 18 + 15 = 33
                offer("D", 5.0, false, 1, None),
            ],
        };
        let cmp = PriceComparator::default().compare(&line);

        let order: Vec<&str> = cmp.offers.iter().map(|o| o.supplier_id.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert_eq!(cmp.best_price_supplier_id.as_deref(), Some("C"));
        assert_eq!(cmp.fastest_supplier_id.as_deref(), Some("A"));
        assert_eq!(cmp.price_spread, 3.0);
        assert_eq!(cmp.out_of_stock_count, 1);
    }

    #[test]
    fn test_no_stock() {
        let line = CartLine {
            part_id: "p1".to_string(),
            part_name: None,
            quantity: 1,
            offers: vec![offer("A", 10.0, false, 1, None)],
        };
        let cmp = PriceComparator::default().compare(&line);
        assert!(cmp.offers.is_empty());
        assert!(cmp.best_price_supplier_id.is_none());
        assert_eq!(cmp.price_spread, 0.0);
    }

    #[test]
    fn test_compare_prices_default_shipping() {
        let line = CartLine {
            part_id: "p1".to_string(),
            part_name: None,
            quantity: 1,
            offers: vec![offer("A", 10.0, true, 1, None)],
        };
        let cmp = compare_prices(&line, 5.0);
        assert_eq!(cmp.offers[0].shipping_cost, 5.0);
        assert_eq!(cmp.offers[0].landed_cost, 15.0);
    }
}
