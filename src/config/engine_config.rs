// ==========================================
// 钣喷维修成本引擎 - 引擎参数配置
// ==========================================
// 职责: 材料单价 / 喷漆类型系数 / 驳口策略 / 拆单参数 / 合规扣分权重
// 所有字段均有默认值，配置文件只需覆写差异项
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::PaintType;
use serde::{Deserialize, Serialize};

// ==========================================
// BlendPolicy - 驳口工时策略
// ==========================================

/// 驳口工时策略（仅对第二块及之后的面板生效）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendPolicy {
    /// 每块驳口面板固定工时（小时）
    FixedHours(f64),
    /// 按该面板喷涂工时的比例
    PaintTimeRatio(f64),
}

impl BlendPolicy {
    /// 计算单块面板的驳口工时
    pub fn blend_hours(&self, paint_time: f64) -> f64 {
        match *self {
            BlendPolicy::FixedHours(hours) => hours,
            BlendPolicy::PaintTimeRatio(ratio) => paint_time * ratio,
        }
    }

    fn value(&self) -> f64 {
        match *self {
            BlendPolicy::FixedHours(v) | BlendPolicy::PaintTimeRatio(v) => v,
        }
    }
}

impl Default for BlendPolicy {
    fn default() -> Self {
        BlendPolicy::FixedHours(0.5)
    }
}

// ==========================================
// PaintRateConfig - 喷漆材料参数
// ==========================================

/// 每平方英尺材料基础单价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialRates {
    pub base_coat: f64,
    pub clear_coat: f64,
    pub primer: f64,
    pub sealer: f64,
    pub reducer: f64,
    pub hardener: f64,
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            base_coat: 2.50,
            clear_coat: 1.75,
            primer: 0.85,
            sealer: 0.60,
            reducer: 0.35,
            hardener: 0.55,
        }
    }
}

impl MaterialRates {
    fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("baseCoat", self.base_coat),
            ("clearCoat", self.clear_coat),
            ("primer", self.primer),
            ("sealer", self.sealer),
            ("reducer", self.reducer),
            ("hardener", self.hardener),
        ]
    }
}

/// 喷漆类型材料系数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaintTypeMultipliers {
    pub solid: f64,
    pub metallic: f64,
    pub pearl: f64,
    pub tri_coat: f64,
}

impl Default for PaintTypeMultipliers {
    fn default() -> Self {
        Self {
            solid: 1.0,
            metallic: 1.2,
            pearl: 1.4,
            tri_coat: 1.8,
        }
    }
}

impl PaintTypeMultipliers {
    pub fn for_type(&self, paint_type: PaintType) -> f64 {
        match paint_type {
            PaintType::Solid => self.solid,
            PaintType::Metallic => self.metallic,
            PaintType::Pearl => self.pearl,
            PaintType::TriCoat => self.tri_coat,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaintRateConfig {
    pub material_rates: MaterialRates,
    pub multipliers: PaintTypeMultipliers,
    pub blend_policy: BlendPolicy,
}

impl PaintRateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, rate) in self.material_rates.entries() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("paint.materialRates.{}", name),
                    message: format!("材料单价必须为非负数，实际 {}", rate),
                });
            }
        }

        for paint_type in PaintType::ALL {
            let m = self.multipliers.for_type(paint_type);
            if !m.is_finite() || m <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("paint.multipliers.{}", paint_type),
                    message: format!("喷漆类型系数必须大于0，实际 {}", m),
                });
            }
        }

        let blend = self.blend_policy.value();
        if !blend.is_finite() || blend < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "paint.blendPolicy".to_string(),
                message: format!("驳口参数必须为非负数，实际 {}", blend),
            });
        }

        Ok(())
    }
}

// ==========================================
// CartOptimizerConfig - 拆单参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartOptimizerConfig {
    /// 报价未提供运费时使用的单笔运费
    pub default_shipping_cost: f64,
    /// 第二轮合并：单行货值不超过该值才考虑并单
    pub consolidation_max_line_value: f64,
}

impl Default for CartOptimizerConfig {
    fn default() -> Self {
        Self {
            default_shipping_cost: 15.0,
            consolidation_max_line_value: 250.0,
        }
    }
}

impl CartOptimizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_shipping_cost.is_finite() || self.default_shipping_cost < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "cart.defaultShippingCost".to_string(),
                message: format!("默认运费必须为非负数，实际 {}", self.default_shipping_cost),
            });
        }
        if !self.consolidation_max_line_value.is_finite() || self.consolidation_max_line_value < 0.0
        {
            return Err(ConfigError::InvalidValue {
                key: "cart.consolidationMaxLineValue".to_string(),
                message: format!(
                    "并单货值阈值必须为非负数，实际 {}",
                    self.consolidation_max_line_value
                ),
            });
        }
        Ok(())
    }
}

// ==========================================
// ComplianceWeights - 合规扣分权重
// ==========================================

/// 单项扣分规则: min(cap, 超出量 × per_unit)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionRule {
    pub per_unit: f64,
    pub cap: f64,
}

impl DeductionRule {
    pub const fn new(per_unit: f64, cap: f64) -> Self {
        Self { per_unit, cap }
    }

    /// 计算封顶后的扣分（excess <= 0 时为 0）
    pub fn apply(&self, excess: f64) -> f64 {
        if excess <= 0.0 {
            0.0
        } else {
            (excess * self.per_unit).min(self.cap)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplianceWeights {
    /// 每低 1 分 CSI 扣 3 分，封顶 30
    pub csi_deficit: DeductionRule,
    /// 每超 1 天扣 2 分，封顶 25
    pub cycle_time_overage: DeductionRule,
    /// 按缺口比例扣分: (缺口/最低台次) × 20，封顶 20
    pub volume_shortfall: DeductionRule,
    /// 每项逾期扣 5 分，封顶 15
    pub overdue_requirement: DeductionRule,
    /// 审核逾期固定扣分
    pub audit_overdue_points: f64,
}

impl Default for ComplianceWeights {
    fn default() -> Self {
        Self {
            csi_deficit: DeductionRule::new(3.0, 30.0),
            cycle_time_overage: DeductionRule::new(2.0, 25.0),
            volume_shortfall: DeductionRule::new(20.0, 20.0),
            overdue_requirement: DeductionRule::new(5.0, 15.0),
            audit_overdue_points: 10.0,
        }
    }
}

impl ComplianceWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = [
            ("csiDeficit", self.csi_deficit),
            ("cycleTimeOverage", self.cycle_time_overage),
            ("volumeShortfall", self.volume_shortfall),
            ("overdueRequirement", self.overdue_requirement),
        ];
        for (name, rule) in rules {
            if !rule.per_unit.is_finite() || rule.per_unit < 0.0 || !rule.cap.is_finite() || rule.cap < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("compliance.{}", name),
                    message: format!("扣分规则必须为非负数: perUnit={}, cap={}", rule.per_unit, rule.cap),
                });
            }
        }
        if !self.audit_overdue_points.is_finite() || self.audit_overdue_points < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "compliance.auditOverduePoints".to_string(),
                message: format!("审核逾期扣分必须为非负数，实际 {}", self.audit_overdue_points),
            });
        }
        Ok(())
    }
}

// ==========================================
// EngineConfig - 引擎总配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub paint: PaintRateConfig,
    pub cart: CartOptimizerConfig,
    pub compliance: ComplianceWeights,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paint.validate()?;
        self.cart.validate()?;
        self.compliance.validate()
    }
}
