// ==========================================
// 钣喷维修成本引擎 - 喷漆估价 API
// ==========================================
// 职责: 面板名解析（工时表） + 漆种解析 + 估价
// ==========================================

use crate::api::dto::{PaintEstimateRequest, PanelSelection};
use crate::api::error::{ApiError, ApiResult};
use crate::config::engine_config::PaintRateConfig;
use crate::domain::paint::{PaintCostResult, PaintJobRequest, PanelPaintProfile};
use crate::domain::types::PaintType;
use crate::engine::paint_estimator::PaintEstimator;
use crate::engine::paint_time_table::panel_profile;

/// 喷漆估价API
pub struct PaintEstimateApi {
    estimator: PaintEstimator,
}

impl PaintEstimateApi {
    pub fn new(config: PaintRateConfig) -> Self {
        Self {
            estimator: PaintEstimator::new(config),
        }
    }

    /// 估价（金额已按分取整）
    pub fn estimate(&self, request: &PaintEstimateRequest) -> ApiResult<PaintCostResult> {
        let paint_type: PaintType = request
            .paint_type
            .parse()
            .map_err(|reason: String| ApiError::invalid_input("paintType", reason))?;

        let panels = request
            .panels
            .iter()
            .enumerate()
            .map(|(idx, selection)| resolve_panel(idx, selection))
            .collect::<ApiResult<Vec<_>>>()?;

        let job = PaintJobRequest {
            panels,
            paint_type,
            labor_rate: request.labor_rate,
            include_blend: request.include_blend,
        };
        let result = self.estimator.calculate_estimate(&job)?;
        Ok(result.rounded())
    }
}

impl Default for PaintEstimateApi {
    fn default() -> Self {
        Self::new(PaintRateConfig::default())
    }
}

fn resolve_panel(idx: usize, selection: &PanelSelection) -> ApiResult<PanelPaintProfile> {
    match selection {
        PanelSelection::Profile(profile) => Ok(profile.clone()),
        PanelSelection::Name(name) => panel_profile(name).ok_or_else(|| {
            ApiError::invalid_input(format!("panels[{}]", idx), format!("未知面板: {}", name))
        }),
    }
}
