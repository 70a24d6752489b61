// ==========================================
// 钣喷维修成本引擎 - DRP 合规 API
// ==========================================

use crate::api::dto::ComplianceRequest;
use crate::api::error::ApiResult;
use crate::config::engine_config::ComplianceWeights;
use crate::domain::drp::{ComplianceScore, DrpProgramSnapshot};
use crate::engine::compliance::ComplianceScorer;
use chrono::{NaiveDate, Utc};

/// 合规评分API
pub struct ComplianceApi {
    scorer: ComplianceScorer,
}

impl ComplianceApi {
    pub fn new(weights: ComplianceWeights) -> Self {
        Self {
            scorer: ComplianceScorer::new(weights),
        }
    }

    /// 以今天（UTC）为评估日期评分
    pub fn score(&self, program: &DrpProgramSnapshot) -> ApiResult<ComplianceScore> {
        self.score_as_of(program, Utc::now().date_naive())
    }

    pub fn score_as_of(
        &self,
        program: &DrpProgramSnapshot,
        as_of: NaiveDate,
    ) -> ApiResult<ComplianceScore> {
        Ok(self.scorer.evaluate(program, as_of))
    }

    pub fn score_request(&self, request: &ComplianceRequest) -> ApiResult<ComplianceScore> {
        match request.as_of {
            Some(as_of) => self.score_as_of(&request.program, as_of),
            None => self.score(&request.program),
        }
    }
}

impl Default for ComplianceApi {
    fn default() -> Self {
        Self::new(ComplianceWeights::default())
    }
}
