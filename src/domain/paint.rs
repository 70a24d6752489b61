// ==========================================
// 钣喷维修成本引擎 - 喷漆估价领域模型
// ==========================================
// 职责: 面板工时档案 / 估价请求 / 估价结果
// 红线: 内部全精度计算，仅在展示层保留两位小数
// ==========================================

use crate::domain::types::PaintType;
use serde::{Deserialize, Serialize};

/// 四舍五入到分（仅用于展示）
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// PanelPaintProfile - 面板喷漆工时档案
// ==========================================

/// 面板喷漆工时档案（静态参考数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPaintProfile {
    /// 面板名称（如 Hood / Front Bumper）
    pub part_name: String,
    /// 前处理工时（小时）
    pub prep_time: f64,
    /// 喷涂工时（小时）
    pub paint_time: f64,
    /// 抛光收尾工时（小时）
    pub finish_time: f64,
    /// 喷涂面积（平方英尺）
    pub square_feet: f64,
}

impl PanelPaintProfile {
    pub fn new(
        part_name: &str,
        prep_time: f64,
        paint_time: f64,
        finish_time: f64,
        square_feet: f64,
    ) -> Self {
        Self {
            part_name: part_name.to_string(),
            prep_time,
            paint_time,
            finish_time,
            square_feet,
        }
    }

    /// 基础工时（不含驳口）
    pub fn base_hours(&self) -> f64 {
        self.prep_time + self.paint_time + self.finish_time
    }
}

// ==========================================
// PaintJobRequest - 喷漆估价请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintJobRequest {
    /// 选中的面板（顺序即明细顺序）
    pub panels: Vec<PanelPaintProfile>,
    pub paint_type: PaintType,
    /// 工时单价（元/小时）
    pub labor_rate: f64,
    /// 是否计入相邻面板驳口工时
    #[serde(default)]
    pub include_blend: bool,
}

// ==========================================
// PaintCostResult - 喷漆估价结果
// ==========================================

/// 六项材料成本
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCostBreakdown {
    pub base_coat: f64,
    pub clear_coat: f64,
    pub primer: f64,
    pub sealer: f64,
    pub reducer: f64,
    pub hardener: f64,
}

impl MaterialCostBreakdown {
    pub fn total(&self) -> f64 {
        self.base_coat + self.clear_coat + self.primer + self.sealer + self.reducer + self.hardener
    }

    fn rounded(&self) -> Self {
        Self {
            base_coat: round_currency(self.base_coat),
            clear_coat: round_currency(self.clear_coat),
            primer: round_currency(self.primer),
            sealer: round_currency(self.sealer),
            reducer: round_currency(self.reducer),
            hardener: round_currency(self.hardener),
        }
    }
}

/// 单面板成本明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelCostBreakdown {
    pub part_name: String,
    /// 该面板工时（含驳口）
    pub labor_hours: f64,
    pub labor_cost: f64,
    /// 按面积比例分摊的材料成本
    pub material_cost: f64,
    pub total_cost: f64,
}

/// 喷漆估价结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintCostResult {
    pub paint_type: PaintType,
    pub labor_rate: f64,
    pub total_panels: usize,
    pub total_square_feet: f64,

    // ===== 工时 =====
    pub prep_hours: f64,
    pub paint_hours: f64,
    pub finish_hours: f64,
    pub blend_hours: f64,
    pub total_labor_hours: f64,

    // ===== 工时费 =====
    pub prep_labor_cost: f64,
    pub paint_labor_cost: f64,
    pub finish_labor_cost: f64,
    pub blend_labor_cost: f64,
    pub total_labor_cost: f64,

    // ===== 材料费 =====
    pub paint_type_multiplier: f64,
    pub materials: MaterialCostBreakdown,
    pub total_material_cost: f64,

    pub total_cost: f64,
    pub panel_breakdown: Vec<PanelCostBreakdown>,
}

impl PaintCostResult {
    /// 展示副本：金额保留两位小数，工时/面积保持原值
    pub fn rounded(&self) -> Self {
        Self {
            prep_labor_cost: round_currency(self.prep_labor_cost),
            paint_labor_cost: round_currency(self.paint_labor_cost),
            finish_labor_cost: round_currency(self.finish_labor_cost),
            blend_labor_cost: round_currency(self.blend_labor_cost),
            total_labor_cost: round_currency(self.total_labor_cost),
            materials: self.materials.rounded(),
            total_material_cost: round_currency(self.total_material_cost),
            total_cost: round_currency(self.total_cost),
            panel_breakdown: self
                .panel_breakdown
                .iter()
                .map(|p| PanelCostBreakdown {
                    part_name: p.part_name.clone(),
                    labor_hours: p.labor_hours,
                    labor_cost: round_currency(p.labor_cost),
                    material_cost: round_currency(p.material_cost),
                    total_cost: round_currency(p.total_cost),
                })
                .collect(),
            ..self.clone()
        }
    }
}
