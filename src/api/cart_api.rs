// ==========================================
// 钣喷维修成本引擎 - 配件采购 API
// ==========================================
// 职责: 拆单优化、单配件比价
// ==========================================

use crate::api::dto::{ComparePricesRequest, OptimizeCartRequest, PriceTableCartRequest};
use crate::api::error::ApiResult;
use crate::config::engine_config::CartOptimizerConfig;
use crate::domain::cart::OptimizationResult;
use crate::engine::cart_optimizer::CartOptimizer;
use crate::engine::error::ensure_non_negative;
use crate::engine::price_comparison::{compare_prices, PriceComparison};
use crate::engine::supplier_price_table::SupplierPriceTable;

/// 配件采购API
pub struct CartApi {
    optimizer: CartOptimizer,
}

impl CartApi {
    pub fn new(config: CartOptimizerConfig) -> Self {
        Self {
            optimizer: CartOptimizer::new(config),
        }
    }

    /// 拆单优化（金额已按分取整）
    pub fn optimize(&self, request: &OptimizeCartRequest) -> ApiResult<OptimizationResult> {
        let result = self.optimizer.optimize(&request.items, request.tax_rate)?;
        Ok(result.rounded())
    }

    /// 按价格表组装购物车后拆单（表中不存在的配件记为无法采购）
    pub fn optimize_from_table(
        &self,
        table: &SupplierPriceTable,
        request: &PriceTableCartRequest,
    ) -> ApiResult<OptimizationResult> {
        let items = table.build_cart(&request.requests);
        let result = self.optimizer.optimize(&items, request.tax_rate)?;
        Ok(result.rounded())
    }

    /// 单配件比价
    pub fn compare(&self, request: &ComparePricesRequest) -> ApiResult<PriceComparison> {
        let default_shipping = request
            .default_shipping
            .unwrap_or(self.optimizer.config().default_shipping_cost);
        ensure_non_negative("defaultShipping", default_shipping)?;
        Ok(compare_prices(&request.item, default_shipping))
    }
}

impl Default for CartApi {
    fn default() -> Self {
        Self::new(CartOptimizerConfig::default())
    }
}
