// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use collision_cost_engine::domain::cart::{CartLine, SupplierOffer};
use collision_cost_engine::domain::drp::{DrpProgramSnapshot, ProgramRequirement};
use collision_cost_engine::domain::paint::{PaintJobRequest, PanelPaintProfile};
use collision_cost_engine::domain::types::PaintType;
use collision_cost_engine::engine::panel_profile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// 喷漆请求
// ==========================================

pub fn hood() -> PanelPaintProfile {
    PanelPaintProfile::new("Hood", 0.5, 0.8, 0.3, 12.0)
}

/// 按工时表面板名构造请求
pub fn paint_request(
    panel_names: &[&str],
    paint_type: PaintType,
    labor_rate: f64,
    include_blend: bool,
) -> PaintJobRequest {
    PaintJobRequest {
        panels: panel_names
            .iter()
            .map(|name| panel_profile(name).unwrap())
            .collect(),
        paint_type,
        labor_rate,
        include_blend,
    }
}

// ==========================================
// CartLine 构建器
// ==========================================

pub struct CartLineBuilder {
    part_id: String,
    quantity: u32,
    offers: Vec<SupplierOffer>,
}

impl CartLineBuilder {
    pub fn new(part_id: &str) -> Self {
        Self {
            part_id: part_id.to_string(),
            quantity: 1,
            offers: Vec::new(),
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// 有库存报价（运费取缺省值）
    pub fn offer(mut self, supplier_id: &str, unit_price: f64, shipping_days: u32) -> Self {
        self.offers.push(offer(supplier_id, unit_price, true, shipping_days, None));
        self
    }

    pub fn offer_with_shipping(
        mut self,
        supplier_id: &str,
        unit_price: f64,
        shipping_days: u32,
        shipping_cost: f64,
    ) -> Self {
        self.offers.push(offer(
            supplier_id,
            unit_price,
            true,
            shipping_days,
            Some(shipping_cost),
        ));
        self
    }

    pub fn out_of_stock(mut self, supplier_id: &str, unit_price: f64) -> Self {
        self.offers.push(offer(supplier_id, unit_price, false, 1, None));
        self
    }

    pub fn build(self) -> CartLine {
        CartLine {
            part_id: self.part_id,
            part_name: None,
            quantity: self.quantity,
            offers: self.offers,
        }
    }
}

fn offer(
    supplier_id: &str,
    unit_price: f64,
    in_stock: bool,
    shipping_days: u32,
    shipping_cost: Option<f64>,
) -> SupplierOffer {
    SupplierOffer {
        supplier_id: supplier_id.to_string(),
        supplier_name: format!("Supplier {}", supplier_id),
        unit_price,
        in_stock,
        shipping_days,
        shipping_cost,
    }
}

/// 确定性伪随机购物车（线性同余），用于性质测试
pub fn generated_cart(seed: u64, lines: usize) -> Vec<CartLine> {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let suppliers = ["A", "B", "C", "D"];
    (0..lines)
        .map(|i| {
            let mut builder = CartLineBuilder::new(&format!("part-{}", i)).quantity(1 + next(4) as u32);
            for supplier in suppliers.iter().take(1 + next(4) as usize) {
                let price = 5.0 + next(300) as f64;
                if next(5) == 0 {
                    builder = builder.out_of_stock(supplier, price);
                } else {
                    builder = builder.offer(supplier, price, 1 + next(7) as u32);
                }
            }
            builder.build()
        })
        .collect()
}

// ==========================================
// DRP 快照构建器
// ==========================================

pub struct ProgramBuilder {
    snapshot: DrpProgramSnapshot,
}

impl ProgramBuilder {
    /// 所有 KPI 达标
    pub fn healthy(program_id: &str) -> Self {
        Self {
            snapshot: DrpProgramSnapshot {
                program_id: program_id.to_string(),
                program_name: format!("Program {}", program_id),
                min_csi_score: Some(90.0),
                current_csi_score: Some(95.0),
                max_cycle_time_days: Some(7.0),
                avg_cycle_time_days: Some(6.0),
                min_monthly_jobs: Some(20),
                current_monthly_jobs: Some(25),
                requirements: Vec::new(),
                next_audit_date: Some(date(2030, 1, 1)),
            },
        }
    }

    pub fn csi(mut self, min: f64, current: f64) -> Self {
        self.snapshot.min_csi_score = Some(min);
        self.snapshot.current_csi_score = Some(current);
        self
    }

    pub fn cycle_time(mut self, max: f64, avg: f64) -> Self {
        self.snapshot.max_cycle_time_days = Some(max);
        self.snapshot.avg_cycle_time_days = Some(avg);
        self
    }

    pub fn monthly_jobs(mut self, min: u32, current: u32) -> Self {
        self.snapshot.min_monthly_jobs = Some(min);
        self.snapshot.current_monthly_jobs = Some(current);
        self
    }

    pub fn overdue_requirement(mut self, name: &str, due: NaiveDate) -> Self {
        self.snapshot.requirements.push(ProgramRequirement {
            name: name.to_string(),
            mandatory: true,
            completed: false,
            due_date: Some(due),
        });
        self
    }

    pub fn next_audit(mut self, audit: NaiveDate) -> Self {
        self.snapshot.next_audit_date = Some(audit);
        self
    }

    pub fn build(self) -> DrpProgramSnapshot {
        self.snapshot
    }
}
