// ==========================================
// 钣喷维修成本引擎 - DRP 合规评分引擎
// ==========================================
// 输入: DRP 项目 KPI 快照 + 评估日期
// 输出: 0-100 分 + 状态档位 + 扣分明细
// ==========================================
// 规则: 满分 100，五项独立扣分，各自封顶；缺省 KPI 不扣分
// ==========================================

use crate::config::engine_config::ComplianceWeights;
use crate::domain::drp::{ComplianceDeduction, ComplianceScore, DrpProgramSnapshot};
use crate::domain::types::{ComplianceStatus, DeductionKind};
use crate::i18n::{status_label, t_with_args};
use chrono::{NaiveDate, Utc};
use tracing::instrument;

const FULL_SCORE: f64 = 100.0;

// ==========================================
// ComplianceScorer - 合规评分引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ComplianceScorer {
    weights: ComplianceWeights,
}

impl ComplianceScorer {
    /// 构造函数
    ///
    /// # 参数
    /// - `weights`: 各扣分项的单位扣分与封顶
    ///
    /// 权重不在此校验（见 `ComplianceWeights::validate`）；
    /// 负数或非有限的扣分一律按 0 处理，分数始终落在 0-100
    pub fn new(weights: ComplianceWeights) -> Self {
        Self { weights }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估项目合规
    ///
    /// # 参数
    /// - `program`: KPI 快照
    /// - `as_of`: 评估日期（用于判断要求/审核是否逾期）
    #[instrument(skip(self, program), fields(program_id = %program.program_id))]
    pub fn evaluate(&self, program: &DrpProgramSnapshot, as_of: NaiveDate) -> ComplianceScore {
        let deductions: Vec<ComplianceDeduction> = [
            self.csi_deduction(program),
            self.cycle_time_deduction(program),
            self.volume_deduction(program),
            self.overdue_requirement_deduction(program, as_of),
            self.audit_deduction(program, as_of),
        ]
        .into_iter()
        .flatten()
        .collect();

        let total_points: f64 = deductions.iter().map(|d| d.points).sum();
        let score = (FULL_SCORE - total_points).max(0.0).round().min(FULL_SCORE) as u8;
        let status = ComplianceStatus::from_score(score);

        tracing::debug!(score, status = %status, deductions = deductions.len(), "合规评分完成");

        ComplianceScore {
            program_id: program.program_id.clone(),
            score,
            status,
            status_label: status_label(status),
            as_of,
            deductions,
        }
    }

    /// 仅返回分数
    pub fn score(&self, program: &DrpProgramSnapshot, as_of: NaiveDate) -> u8 {
        self.evaluate(program, as_of).score
    }

    /// 批量评估，按分数升序（最差的排在最前）
    pub fn score_programs(
        &self,
        programs: &[DrpProgramSnapshot],
        as_of: NaiveDate,
    ) -> Vec<ComplianceScore> {
        let mut scores: Vec<ComplianceScore> =
            programs.iter().map(|p| self.evaluate(p, as_of)).collect();
        scores.sort_by(|a, b| {
            a.score
                .cmp(&b.score)
                .then_with(|| a.program_id.cmp(&b.program_id))
        });
        scores
    }

    // ==========================================
    // 扣分项
    // ==========================================

    /// CSI 不达标: min(30, (最低 - 当前) × 3)
    fn csi_deduction(&self, program: &DrpProgramSnapshot) -> Option<ComplianceDeduction> {
        let (min, current) = (program.min_csi_score?, program.current_csi_score?);
        let points = self.weights.csi_deficit.apply(min - current);
        deduction(
            DeductionKind::CsiDeficit,
            points,
            "compliance.deduction.csi_deficit",
            &[("current", format_number(current)), ("min", format_number(min))],
        )
    }

    /// 维修周期超标: min(25, (平均 - 上限) × 2)
    fn cycle_time_deduction(&self, program: &DrpProgramSnapshot) -> Option<ComplianceDeduction> {
        let (max, avg) = (program.max_cycle_time_days?, program.avg_cycle_time_days?);
        let points = self.weights.cycle_time_overage.apply(avg - max);
        deduction(
            DeductionKind::CycleTimeOverage,
            points,
            "compliance.deduction.cycle_time_overage",
            &[("avg", format_number(avg)), ("max", format_number(max))],
        )
    }

    /// 月度台次不足: min(20, 缺口 / 最低台次 × 20)
    fn volume_deduction(&self, program: &DrpProgramSnapshot) -> Option<ComplianceDeduction> {
        let (min, current) = (program.min_monthly_jobs?, program.current_monthly_jobs?);
        if min == 0 {
            return None;
        }
        let shortfall_ratio = (f64::from(min) - f64::from(current)) / f64::from(min);
        let points = self.weights.volume_shortfall.apply(shortfall_ratio);
        deduction(
            DeductionKind::VolumeShortfall,
            points,
            "compliance.deduction.volume_shortfall",
            &[("current", current.to_string()), ("min", min.to_string())],
        )
    }

    /// 强制要求逾期: min(15, 逾期项数 × 5)
    fn overdue_requirement_deduction(
        &self,
        program: &DrpProgramSnapshot,
        as_of: NaiveDate,
    ) -> Option<ComplianceDeduction> {
        let count = program.overdue_requirement_count(as_of);
        let points = self.weights.overdue_requirement.apply(count as f64);
        deduction(
            DeductionKind::OverdueRequirements,
            points,
            "compliance.deduction.overdue_requirements",
            &[("count", count.to_string())],
        )
    }

    /// 审核逾期: 固定扣分
    fn audit_deduction(
        &self,
        program: &DrpProgramSnapshot,
        as_of: NaiveDate,
    ) -> Option<ComplianceDeduction> {
        let audit_date = program.next_audit_date?;
        if audit_date >= as_of {
            return None;
        }
        deduction(
            DeductionKind::AuditOverdue,
            self.weights.audit_overdue_points,
            "compliance.deduction.audit_overdue",
            &[("date", audit_date.to_string())],
        )
    }
}

/// 构造扣分项（0 分、负分、非有限值不记录）
fn deduction(
    kind: DeductionKind,
    points: f64,
    reason_key: &str,
    args: &[(&str, String)],
) -> Option<ComplianceDeduction> {
    if !points.is_finite() || points <= 0.0 {
        return None;
    }
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    Some(ComplianceDeduction {
        kind,
        points,
        reason: t_with_args(reason_key, &args),
    })
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// 以今天（UTC）为评估日期，使用默认权重计算合规分
pub fn calculate_compliance_score(program: &DrpProgramSnapshot) -> u8 {
    ComplianceScorer::default().score(program, Utc::now().date_naive())
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drp::ProgramRequirement;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2026, 6, 15)
    }

    fn healthy_program() -> DrpProgramSnapshot {
        DrpProgramSnapshot {
            program_id: "DRP-001".to_string(),
            program_name: "Test Insurer".to_string(),
            min_csi_score: Some(90.0),
            current_csi_score: Some(95.0),
            max_cycle_time_days: Some(7.0),
            avg_cycle_time_days: Some(6.0),
            min_monthly_jobs: Some(20),
            current_monthly_jobs: Some(25),
            requirements: vec![ProgramRequirement {
                name: "Annual training".to_string(),
                mandatory: true,
                completed: true,
                due_date: Some(date(2026, 1, 1)),
            }],
            next_audit_date: Some(date(2027, 1, 1)),
        }
    }

    #[test]
    fn test_scenario_01_all_kpis_met() {
        let result = ComplianceScorer::default().evaluate(&healthy_program(), as_of());
        assert_eq!(result.score, 100);
        assert_eq!(result.status, ComplianceStatus::Compliant);
        assert!(result.deductions.is_empty());
    }

    #[test]
    fn test_scenario_02_csi_deficit_warning() {
        // CSI 85 < 90，周期恰好等于上限不扣分
        let mut program = healthy_program();
        program.current_csi_score = Some(85.0);
        program.avg_cycle_time_days = Some(7.0);
        let result = ComplianceScorer::default().evaluate(&program, as_of());
        assert_eq!(result.score, 85);
        assert_eq!(result.status, ComplianceStatus::Warning);
        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].kind, DeductionKind::CsiDeficit);
        assert_eq!(result.deductions[0].points, 15.0);
    }

    #[test]
    fn test_scenario_03_caps_applied() {
        let mut program = healthy_program();
        program.current_csi_score = Some(50.0); // 120 → 30
        program.avg_cycle_time_days = Some(30.0); // 46 → 25
        program.current_monthly_jobs = Some(0); // 20
        program.requirements = (0..5)
            .map(|i| ProgramRequirement {
                name: format!("req-{}", i),
                mandatory: true,
                completed: false,
                due_date: Some(date(2026, 1, 1)),
            })
            .collect(); // 25 → 15
        program.next_audit_date = Some(date(2026, 1, 1)); // 10
        let result = ComplianceScorer::default().evaluate(&program, as_of());
        assert_eq!(result.score, 0);
        assert_eq!(result.status, ComplianceStatus::NonCompliant);
        assert_eq!(result.deductions.len(), 5);
        let total: f64 = result.deductions.iter().map(|d| d.points).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_scenario_04_volume_shortfall_proportional() {
        let mut program = healthy_program();
        program.current_monthly_jobs = Some(15); // 缺口 5/20 × 20 = 5
        let result = ComplianceScorer::default().evaluate(&program, as_of());
        assert_eq!(result.score, 95);
    }

    #[test]
    fn test_scenario_05_missing_kpis_skipped() {
        let program = DrpProgramSnapshot {
            program_id: "DRP-EMPTY".to_string(),
            ..DrpProgramSnapshot::default()
        };
        assert_eq!(ComplianceScorer::default().score(&program, as_of()), 100);
    }

    #[test]
    fn test_scenario_06_rounding() {
        // 周期超 0.3 天 → 0.6 分 → 99.4 → 99
        let mut program = healthy_program();
        program.avg_cycle_time_days = Some(7.3);
        assert_eq!(ComplianceScorer::default().score(&program, as_of()), 99);

        // 超 0.2 天 → 0.4 分 → 99.6 → 100
        program.avg_cycle_time_days = Some(7.2);
        assert_eq!(ComplianceScorer::default().score(&program, as_of()), 100);
    }

    #[test]
    fn test_scenario_07_score_programs_worst_first() {
        let mut bad = healthy_program();
        bad.program_id = "DRP-BAD".to_string();
        bad.current_csi_score = Some(70.0);
        let programs = vec![healthy_program(), bad];
        let scores = ComplianceScorer::default().score_programs(&programs, as_of());
        assert_eq!(scores[0].program_id, "DRP-BAD");
        assert_eq!(scores[1].program_id, "DRP-001");
    }

    #[test]
    fn test_scenario_08_audit_today_not_overdue() {
        let mut program = healthy_program();
        program.next_audit_date = Some(as_of());
        assert_eq!(ComplianceScorer::default().score(&program, as_of()), 100);
    }

    #[test]
    fn test_scenario_09_unvalidated_negative_weights_never_raise_score() {
        use crate::config::engine_config::DeductionRule;

        let weights = ComplianceWeights {
            csi_deficit: DeductionRule::new(3.0, -30.0),
            volume_shortfall: DeductionRule::new(-20.0, 20.0),
            audit_overdue_points: -10.0,
            ..ComplianceWeights::default()
        };
        let mut program = healthy_program();
        program.current_csi_score = Some(80.0);
        program.current_monthly_jobs = Some(10);
        program.next_audit_date = Some(date(2026, 1, 1));

        let result = ComplianceScorer::new(weights).evaluate(&program, as_of());
        assert_eq!(result.score, 100);
        assert!(result.deductions.is_empty());
        assert!(!result.status_label.is_empty());
    }
}
