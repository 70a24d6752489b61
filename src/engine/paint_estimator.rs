// ==========================================
// 钣喷维修成本引擎 - 喷漆估价引擎
// ==========================================
// 输入: 选中面板 + 喷漆类型 + 工时单价 + 是否驳口
// 输出: 分工序工时/工时费 + 六项材料费 + 单面板明细
// 红线: 内部全精度，不做中间取整
// ==========================================

use crate::config::engine_config::PaintRateConfig;
use crate::domain::paint::{
    MaterialCostBreakdown, PaintCostResult, PaintJobRequest, PanelCostBreakdown,
};
use crate::engine::error::{ensure_non_negative, EngineError, EngineResult};
use tracing::instrument;

// ==========================================
// PaintEstimator - 喷漆估价引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PaintEstimator {
    config: PaintRateConfig,
}

/// 分工序工时累加器
#[derive(Debug, Default)]
struct PhaseHours {
    prep: f64,
    paint: f64,
    finish: f64,
    blend: f64,
}

impl PhaseHours {
    fn total(&self) -> f64 {
        self.prep + self.paint + self.finish + self.blend
    }
}

impl PaintEstimator {
    /// 构造函数
    ///
    /// # 参数
    /// - `config`: 材料单价、喷漆类型系数、驳口策略
    pub fn new(config: PaintRateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaintRateConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算喷漆估价
    ///
    /// 步骤:
    /// 1) 单面板工时 = 前处理 + 喷涂 + 收尾（+ 驳口，首块面板除外）
    /// 2) 分工序汇总工时，工时费 = 工时 × 单价
    /// 3) 材料费 = 单价/平方英尺 × 总面积 × 喷漆类型系数
    /// 4) 单面板明细: 自身工时费 + 按面积分摊的材料费
    ///
    /// # 错误
    /// - 面板为空 / 工时单价 <= 0 / 面板数值非法 → InvalidInput
    #[instrument(skip(self, request), fields(
        panels = request.panels.len(),
        paint_type = %request.paint_type,
        include_blend = request.include_blend
    ))]
    pub fn calculate_estimate(&self, request: &PaintJobRequest) -> EngineResult<PaintCostResult> {
        self.validate_request(request)?;

        let labor_rate = request.labor_rate;

        // 1. 单面板工时与分工序汇总
        let mut phases = PhaseHours::default();
        let mut panel_hours = Vec::with_capacity(request.panels.len());
        for (idx, panel) in request.panels.iter().enumerate() {
            let blend = if request.include_blend && idx > 0 {
                self.config.blend_policy.blend_hours(panel.paint_time)
            } else {
                0.0
            };

            phases.prep += panel.prep_time;
            phases.paint += panel.paint_time;
            phases.finish += panel.finish_time;
            phases.blend += blend;
            panel_hours.push(panel.base_hours() + blend);
        }

        // 2. 工时费
        let prep_labor_cost = phases.prep * labor_rate;
        let paint_labor_cost = phases.paint * labor_rate;
        let finish_labor_cost = phases.finish * labor_rate;
        let blend_labor_cost = phases.blend * labor_rate;
        let total_labor_cost =
            prep_labor_cost + paint_labor_cost + finish_labor_cost + blend_labor_cost;

        // 3. 材料费
        let total_square_feet: f64 = request.panels.iter().map(|p| p.square_feet).sum();
        let multiplier = self.config.multipliers.for_type(request.paint_type);
        let materials = self.calculate_materials(total_square_feet, multiplier);
        let total_material_cost = materials.total();

        // 4. 单面板明细
        let panel_breakdown = request
            .panels
            .iter()
            .zip(panel_hours)
            .map(|(panel, hours)| {
                let labor_cost = hours * labor_rate;
                let material_cost = if total_square_feet > 0.0 {
                    total_material_cost * panel.square_feet / total_square_feet
                } else {
                    0.0
                };
                PanelCostBreakdown {
                    part_name: panel.part_name.clone(),
                    labor_hours: hours,
                    labor_cost,
                    material_cost,
                    total_cost: labor_cost + material_cost,
                }
            })
            .collect();

        let result = PaintCostResult {
            paint_type: request.paint_type,
            labor_rate,
            total_panels: request.panels.len(),
            total_square_feet,
            prep_hours: phases.prep,
            paint_hours: phases.paint,
            finish_hours: phases.finish,
            blend_hours: phases.blend,
            total_labor_hours: phases.total(),
            prep_labor_cost,
            paint_labor_cost,
            finish_labor_cost,
            blend_labor_cost,
            total_labor_cost,
            paint_type_multiplier: multiplier,
            materials,
            total_material_cost,
            total_cost: total_labor_cost + total_material_cost,
            panel_breakdown,
        };

        tracing::debug!(
            total_labor_hours = result.total_labor_hours,
            total_cost = result.total_cost,
            "喷漆估价完成"
        );

        Ok(result)
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 校验请求
    fn validate_request(&self, request: &PaintJobRequest) -> EngineResult<()> {
        if request.panels.is_empty() {
            return Err(EngineError::invalid_input("panels", "至少选择一块面板"));
        }

        if !request.labor_rate.is_finite() || request.labor_rate <= 0.0 {
            return Err(EngineError::invalid_input(
                "laborRate",
                format!("工时单价必须大于0，实际 {}", request.labor_rate),
            ));
        }

        for (idx, panel) in request.panels.iter().enumerate() {
            ensure_non_negative(format!("panels[{}].prepTime", idx), panel.prep_time)?;
            ensure_non_negative(format!("panels[{}].paintTime", idx), panel.paint_time)?;
            ensure_non_negative(format!("panels[{}].finishTime", idx), panel.finish_time)?;
            ensure_non_negative(format!("panels[{}].squareFeet", idx), panel.square_feet)?;
        }

        Ok(())
    }

    /// 计算六项材料费
    fn calculate_materials(&self, square_feet: f64, multiplier: f64) -> MaterialCostBreakdown {
        let rates = &self.config.material_rates;
        let scale = square_feet * multiplier;
        MaterialCostBreakdown {
            base_coat: rates.base_coat * scale,
            clear_coat: rates.clear_coat * scale,
            primer: rates.primer * scale,
            sealer: rates.sealer * scale,
            reducer: rates.reducer * scale,
            hardener: rates.hardener * scale,
        }
    }
}

/// 使用默认参数计算喷漆估价
pub fn calculate_paint_estimate(request: &PaintJobRequest) -> EngineResult<PaintCostResult> {
    PaintEstimator::default().calculate_estimate(request)
}
