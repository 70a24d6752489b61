// ==========================================
// 钣喷维修成本引擎 - DRP 合规领域模型
// ==========================================
// DRP: 保险公司直赔维修项目（Direct Repair Program）
// 快照由外部事件（工单完工等）更新，评分器只读
// ==========================================

use crate::domain::types::{ComplianceStatus, DeductionKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 项目要求（培训、设备认证、资料提交等）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRequirement {
    pub name: String,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl ProgramRequirement {
    /// 强制、未完成且截止日期早于 as_of
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.mandatory && !self.completed && self.due_date.map_or(false, |d| d < as_of)
    }
}

/// DRP 项目 KPI 快照
///
/// 所有 KPI 均可缺省；缺省项不参与扣分。项目编号只用于标识结果，可为空。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrpProgramSnapshot {
    #[serde(default)]
    pub program_id: String,
    #[serde(default)]
    pub program_name: String,

    // ===== 客户满意度 =====
    #[serde(default, rename = "minCSI", alias = "minCsiScore")]
    pub min_csi_score: Option<f64>,
    #[serde(default, rename = "currentCSI", alias = "currentCsiScore")]
    pub current_csi_score: Option<f64>,

    // ===== 维修周期（天） =====
    #[serde(default, rename = "maxCycleTime", alias = "maxCycleTimeDays")]
    pub max_cycle_time_days: Option<f64>,
    #[serde(default, rename = "avgCycleTime", alias = "avgCycleTimeDays")]
    pub avg_cycle_time_days: Option<f64>,

    // ===== 月度台次 =====
    #[serde(default)]
    pub min_monthly_jobs: Option<u32>,
    #[serde(default)]
    pub current_monthly_jobs: Option<u32>,

    #[serde(default)]
    pub requirements: Vec<ProgramRequirement>,

    #[serde(default)]
    pub next_audit_date: Option<NaiveDate>,
}

impl DrpProgramSnapshot {
    pub fn overdue_requirement_count(&self, as_of: NaiveDate) -> usize {
        self.requirements.iter().filter(|r| r.is_overdue(as_of)).count()
    }
}

/// 单项扣分（可解释性）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDeduction {
    pub kind: DeductionKind,
    /// 扣分（已封顶，未取整）
    pub points: f64,
    pub reason: String,
}

/// 合规评分（随时可由快照重新推导，不作为事实来源持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceScore {
    pub program_id: String,
    pub score: u8,
    pub status: ComplianceStatus,
    /// 本地化状态说明
    pub status_label: String,
    pub as_of: NaiveDate,
    pub deductions: Vec<ComplianceDeduction>,
}
