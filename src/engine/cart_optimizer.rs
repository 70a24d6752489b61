// ==========================================
// 钣喷维修成本引擎 - 配件拆单优化引擎
// ==========================================
// 输入: 购物车行（每行含多个供应商报价）+ 税率
// 输出: 按供应商拆分的订单 + 相对最贵方案的节省额 + 无法采购行
// ==========================================
// 规则:
// 1) 只考虑有库存报价；无库存行单独上报，不抛错
// 2) 第一轮: 每行取单价最低的供应商
// 3) 第二轮: 只挂一行小额货的供应商，若并到已用供应商（含运费）更省则迁移
// ==========================================

use crate::config::engine_config::CartOptimizerConfig;
use crate::domain::cart::{
    CartLine, OptimizationResult, OptimizedOrder, OrderLine, SupplierOffer, UnfulfillableLine,
};
use crate::domain::types::UnfulfillableReason;
use crate::engine::error::{ensure_non_negative, EngineError, EngineResult};
use crate::i18n::unfulfillable_label;
use std::collections::HashSet;
use tracing::instrument;

/// 成本比较容差
const COST_EPSILON: f64 = 1e-9;

/// 已分配的购物车行
type Assignment<'a> = (&'a CartLine, &'a SupplierOffer);

// ==========================================
// CartOptimizer - 拆单优化引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CartOptimizer {
    config: CartOptimizerConfig,
}

impl CartOptimizer {
    /// 构造函数
    ///
    /// # 参数
    /// - `config`: 默认运费、并单货值阈值
    pub fn new(config: CartOptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CartOptimizerConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 优化购物车
    ///
    /// # 参数
    /// - `cart`: 购物车行
    /// - `tax_rate`: 税率（0.08 表示 8%）
    ///
    /// # 返回
    /// OptimizationResult；所有行都无法采购时返回空订单、零合计
    ///
    /// # 错误
    /// - 购物车为空 / 税率为负 / 数量为0 / 价格或运费非法 → InvalidInput
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub fn optimize(&self, cart: &[CartLine], tax_rate: f64) -> EngineResult<OptimizationResult> {
        self.validate(cart, tax_rate)?;

        // 1. 拆分可采购 / 无法采购
        let mut fulfillable: Vec<&CartLine> = Vec::with_capacity(cart.len());
        let mut unfulfillable = Vec::new();
        for line in cart {
            match Self::unfulfillable_reason(line) {
                Some(reason) => {
                    tracing::warn!(part_id = %line.part_id, reason = %reason, "配件无法采购");
                    unfulfillable.push(UnfulfillableLine {
                        part_id: line.part_id.clone(),
                        part_name: line.part_name.clone(),
                        quantity: line.quantity,
                        reason,
                        reason_label: unfulfillable_label(reason),
                    });
                }
                None => fulfillable.push(line),
            }
        }

        // 2. 第一轮: 最低单价
        let mut assignments = self.assign_lowest_price(&fulfillable);

        // 3. 第二轮: 小额单行并单
        self.consolidate_single_line_suppliers(&mut assignments, tax_rate);

        // 4. 组装订单与合计
        let orders = self.build_orders(&assignments, tax_rate);
        let mut result = OptimizationResult {
            unfulfillable,
            ..OptimizationResult::default()
        };
        for order in &orders {
            result.subtotal += order.subtotal;
            result.total_shipping += order.shipping;
            result.total_tax += order.tax;
            result.total_cost += order.total;
        }
        result.total_parts = assignments
            .iter()
            .map(|(line, _)| u64::from(line.quantity))
            .sum();
        result.orders = orders;

        // 5. 相对最贵方案的节省（双方均只比较货款，不含运费与税）
        result.worst_case_total = fulfillable
            .iter()
            .map(|line| Self::worst_case_line_cost(line))
            .sum();
        result.savings_vs_worst_case = (result.worst_case_total - result.subtotal).max(0.0);
        result.savings_percentage = if result.worst_case_total > 0.0 {
            result.savings_vs_worst_case / result.worst_case_total * 100.0
        } else {
            0.0
        };

        tracing::info!(
            orders = result.orders.len(),
            unfulfillable = result.unfulfillable.len(),
            total_cost = result.total_cost,
            savings = result.savings_vs_worst_case,
            "拆单优化完成"
        );

        Ok(result)
    }

    // ==========================================
    // 校验
    // ==========================================

    fn validate(&self, cart: &[CartLine], tax_rate: f64) -> EngineResult<()> {
        if cart.is_empty() {
            return Err(EngineError::invalid_input("items", "购物车为空"));
        }

        if !tax_rate.is_finite() || tax_rate < 0.0 {
            return Err(EngineError::invalid_input(
                "taxRate",
                format!("税率必须为非负数，实际 {}", tax_rate),
            ));
        }

        for (i, line) in cart.iter().enumerate() {
            if line.part_id.trim().is_empty() {
                return Err(EngineError::invalid_input(
                    format!("items[{}].partId", i),
                    "配件ID为空",
                ));
            }
            if line.quantity == 0 {
                return Err(EngineError::invalid_input(
                    format!("items[{}].quantity", i),
                    "数量必须 >= 1",
                ));
            }
            for (j, offer) in line.offers.iter().enumerate() {
                ensure_non_negative(format!("items[{}].offers[{}].unitPrice", i, j), offer.unit_price)?;
                if let Some(cost) = offer.shipping_cost {
                    ensure_non_negative(format!("items[{}].offers[{}].shippingCost", i, j), cost)?;
                }
            }
        }

        Ok(())
    }

    fn unfulfillable_reason(line: &CartLine) -> Option<UnfulfillableReason> {
        if line.offers.is_empty() {
            Some(UnfulfillableReason::NoOffers)
        } else if line.in_stock_offers().next().is_none() {
            Some(UnfulfillableReason::OutOfStock)
        } else {
            None
        }
    }

    // ==========================================
    // 第一轮: 最低单价分配
    // ==========================================

    /// 每行的最优候选报价: 单价最低，其次到货天数最少（保持输入顺序）
    fn best_offers(line: &CartLine) -> Vec<&SupplierOffer> {
        let min_price = line
            .in_stock_offers()
            .map(|o| o.unit_price)
            .fold(f64::INFINITY, f64::min);
        let cheapest: Vec<&SupplierOffer> = line
            .in_stock_offers()
            .filter(|o| o.unit_price == min_price)
            .collect();

        let min_days = cheapest.iter().map(|o| o.shipping_days).min().unwrap_or(0);
        cheapest
            .into_iter()
            .filter(|o| o.shipping_days == min_days)
            .collect()
    }

    /// 第一轮分配
    ///
    /// 平局规则:
    /// 1) 单价低者优先
    /// 2) 到货天数少者优先
    /// 3) 已被其他行选中的供应商优先（并单倾向）
    /// 4) 输入顺序
    fn assign_lowest_price<'a>(&self, lines: &[&'a CartLine]) -> Vec<Assignment<'a>> {
        let candidates: Vec<Vec<&'a SupplierOffer>> =
            lines.iter().map(|&line| Self::best_offers(line)).collect();

        // 先确定无平局的行
        let mut chosen: Vec<Option<&'a SupplierOffer>> = candidates
            .iter()
            .map(|c| if c.len() == 1 { c.first().copied() } else { None })
            .collect();
        let mut used: HashSet<&'a str> = chosen
            .iter()
            .flatten()
            .copied()
            .map(|o| o.supplier_id.as_str())
            .collect();

        // 再处理平局行：倾向已用供应商
        for (slot, cands) in chosen.iter_mut().zip(&candidates) {
            if slot.is_some() {
                continue;
            }
            let pick = cands
                .iter()
                .copied()
                .find(|o| used.contains(o.supplier_id.as_str()))
                .or_else(|| cands.first().copied());
            if let Some(offer) = pick {
                used.insert(offer.supplier_id.as_str());
            }
            *slot = pick;
        }

        lines
            .iter()
            .zip(chosen)
            .filter_map(|(line, offer)| offer.map(|o| (*line, o)))
            .collect()
    }

    // ==========================================
    // 第二轮: 单行供应商并单
    // ==========================================

    /// 对只挂一行小额货的供应商，评估将该行迁移到已用供应商是否更省
    ///
    /// 比较口径（双方一致）: 货款 × (1 + 税率) + 运费增量
    fn consolidate_single_line_suppliers(&self, assignments: &mut [Assignment<'_>], tax_rate: f64) {
        let suppliers = Self::suppliers_in_order(assignments);

        for supplier_id in suppliers {
            let members: Vec<usize> = Self::member_indices(assignments, &supplier_id);
            let [idx] = members.as_slice() else {
                continue;
            };
            let idx = *idx;

            let (line, current) = assignments[idx];
            let quantity = f64::from(line.quantity);
            let line_value = current.unit_price * quantity;
            if line_value > self.config.consolidation_max_line_value {
                continue;
            }

            // 独立成单的成本
            let current_cost =
                line_value * (1.0 + tax_rate) + self.order_shipping(std::iter::once(current));

            let mut best: Option<(&SupplierOffer, f64)> = None;
            for offer in line.in_stock_offers() {
                if offer.supplier_id == supplier_id {
                    continue;
                }
                let target_members = Self::member_indices(assignments, &offer.supplier_id);
                if target_members.is_empty() {
                    continue;
                }

                let before = self.order_shipping(target_members.iter().map(|&i| assignments[i].1));
                let after = self.order_shipping(
                    target_members
                        .iter()
                        .map(|&i| assignments[i].1)
                        .chain(std::iter::once(offer)),
                );
                let moved_cost = offer.unit_price * quantity * (1.0 + tax_rate) + (after - before);

                if moved_cost >= current_cost - COST_EPSILON {
                    continue;
                }

                let better = match best {
                    None => true,
                    Some((b, b_cost)) => {
                        moved_cost < b_cost - COST_EPSILON
                            || ((moved_cost - b_cost).abs() <= COST_EPSILON
                                && offer.shipping_days < b.shipping_days)
                    }
                };
                if better {
                    best = Some((offer, moved_cost));
                }
            }

            if let Some((target, moved_cost)) = best {
                tracing::debug!(
                    part_id = %line.part_id,
                    from = %supplier_id,
                    to = %target.supplier_id,
                    current_cost,
                    moved_cost,
                    "并单迁移"
                );
                assignments[idx] = (line, target);
            }
        }
    }

    fn suppliers_in_order(assignments: &[Assignment<'_>]) -> Vec<String> {
        let mut suppliers: Vec<String> = Vec::new();
        for (_, offer) in assignments {
            if !suppliers.iter().any(|s| s == &offer.supplier_id) {
                suppliers.push(offer.supplier_id.clone());
            }
        }
        suppliers
    }

    fn member_indices(assignments: &[Assignment<'_>], supplier_id: &str) -> Vec<usize> {
        assignments
            .iter()
            .enumerate()
            .filter(|(_, (_, offer))| offer.supplier_id == supplier_id)
            .map(|(i, _)| i)
            .collect()
    }

    // ==========================================
    // 订单组装
    // ==========================================

    /// 单笔订单运费: 取订单内报价声明运费的最大值，均未声明时用默认运费
    fn order_shipping<'b>(&self, offers: impl Iterator<Item = &'b SupplierOffer>) -> f64 {
        offers
            .filter_map(|o| o.shipping_cost)
            .fold(None, |acc: Option<f64>, cost| Some(acc.map_or(cost, |a| a.max(cost))))
            .unwrap_or(self.config.default_shipping_cost)
    }

    fn build_orders(&self, assignments: &[Assignment<'_>], tax_rate: f64) -> Vec<OptimizedOrder> {
        Self::suppliers_in_order(assignments)
            .into_iter()
            .map(|supplier_id| {
                let members: Vec<Assignment<'_>> = assignments
                    .iter()
                    .copied()
                    .filter(|(_, offer)| offer.supplier_id == supplier_id)
                    .collect();

                let supplier_name = members
                    .first()
                    .map(|(_, offer)| offer.supplier_name.clone())
                    .unwrap_or_default();

                let lines: Vec<OrderLine> = members
                    .iter()
                    .map(|(line, offer)| OrderLine {
                        part_id: line.part_id.clone(),
                        part_name: line.part_name.clone(),
                        quantity: line.quantity,
                        unit_price: offer.unit_price,
                        line_total: offer.unit_price * f64::from(line.quantity),
                        shipping_days: offer.shipping_days,
                    })
                    .collect();

                let subtotal: f64 = lines.iter().map(|l| l.line_total).sum();
                let shipping = self.order_shipping(members.iter().map(|(_, offer)| *offer));
                let tax = subtotal * tax_rate;
                let estimated_delivery_days =
                    lines.iter().map(|l| l.shipping_days).max().unwrap_or(0);

                OptimizedOrder {
                    supplier_id,
                    supplier_name,
                    lines,
                    subtotal,
                    shipping,
                    tax,
                    total: subtotal + shipping + tax,
                    estimated_delivery_days,
                }
            })
            .collect()
    }

    /// 按最贵有库存报价购买该行的货款
    fn worst_case_line_cost(line: &CartLine) -> f64 {
        let max_price = line
            .in_stock_offers()
            .map(|o| o.unit_price)
            .fold(0.0, f64::max);
        max_price * f64::from(line.quantity)
    }
}

/// 使用默认参数优化购物车
pub fn optimize_cart(cart: &[CartLine], tax_rate: f64) -> EngineResult<OptimizationResult> {
    CartOptimizer::default().optimize(cart, tax_rate)
}
