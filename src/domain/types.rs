// ==========================================
// 钣喷维修成本引擎 - 领域类型定义
// ==========================================
// 喷漆类型 / 合规状态 / 无法采购原因 / 扣分项类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 喷漆类型 (Paint Type)
// ==========================================
// 序列化格式: kebab-case (solid / metallic / pearl / tri-coat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintType {
    Solid,    // 素色漆
    Metallic, // 金属漆
    Pearl,    // 珍珠漆
    TriCoat,  // 三工序漆
}

impl PaintType {
    /// 全部喷漆类型（按材料成本由低到高）
    pub const ALL: [PaintType; 4] = [
        PaintType::Solid,
        PaintType::Metallic,
        PaintType::Pearl,
        PaintType::TriCoat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaintType::Solid => "solid",
            PaintType::Metallic => "metallic",
            PaintType::Pearl => "pearl",
            PaintType::TriCoat => "tri-coat",
        }
    }
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaintType {
    type Err = String;

    /// 大小写不敏感；兼容 "tricoat" / "tri_coat" 写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Ok(PaintType::Solid),
            "metallic" => Ok(PaintType::Metallic),
            "pearl" => Ok(PaintType::Pearl),
            "tri-coat" | "tricoat" | "tri_coat" => Ok(PaintType::TriCoat),
            other => Err(format!(
                "未知喷漆类型 '{}'（可选: solid / metallic / pearl / tri-coat）",
                other
            )),
        }
    }
}

// ==========================================
// 合规状态 (Compliance Status)
// ==========================================
// 顺序: NonCompliant < Warning < Compliant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    NonCompliant, // 不合规 (<70)
    Warning,      // 预警 (70-89)
    Compliant,    // 合规 (>=90)
}

impl ComplianceStatus {
    /// 由分数推导状态档位
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            ComplianceStatus::Compliant
        } else if score >= 70 {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::NonCompliant
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "COMPLIANT"),
            ComplianceStatus::Warning => write!(f, "WARNING"),
            ComplianceStatus::NonCompliant => write!(f, "NON_COMPLIANT"),
        }
    }
}

// ==========================================
// 无法采购原因 (Unfulfillable Reason)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnfulfillableReason {
    NoOffers,   // 没有任何报价
    OutOfStock, // 有报价但均无库存
}

impl fmt::Display for UnfulfillableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnfulfillableReason::NoOffers => write!(f, "NO_OFFERS"),
            UnfulfillableReason::OutOfStock => write!(f, "OUT_OF_STOCK"),
        }
    }
}

// ==========================================
// 合规扣分项 (Deduction Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeductionKind {
    CsiDeficit,          // CSI 不达标
    CycleTimeOverage,    // 维修周期超标
    VolumeShortfall,     // 月度台次不足
    OverdueRequirements, // 强制要求逾期
    AuditOverdue,        // 审核逾期
}

impl fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeductionKind::CsiDeficit => write!(f, "CSI_DEFICIT"),
            DeductionKind::CycleTimeOverage => write!(f, "CYCLE_TIME_OVERAGE"),
            DeductionKind::VolumeShortfall => write!(f, "VOLUME_SHORTFALL"),
            DeductionKind::OverdueRequirements => write!(f, "OVERDUE_REQUIREMENTS"),
            DeductionKind::AuditOverdue => write!(f, "AUDIT_OVERDUE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_type_parse() {
        assert_eq!("solid".parse::<PaintType>().unwrap(), PaintType::Solid);
        assert_eq!("Metallic".parse::<PaintType>().unwrap(), PaintType::Metallic);
        assert_eq!("tri-coat".parse::<PaintType>().unwrap(), PaintType::TriCoat);
        assert_eq!("tricoat".parse::<PaintType>().unwrap(), PaintType::TriCoat);
        assert!("candy".parse::<PaintType>().is_err());
    }

    #[test]
    fn test_paint_type_serde() {
        let json = serde_json::to_string(&PaintType::TriCoat).unwrap();
        assert_eq!(json, "\"tri-coat\"");
        let parsed: PaintType = serde_json::from_str("\"pearl\"").unwrap();
        assert_eq!(parsed, PaintType::Pearl);
    }

    #[test]
    fn test_compliance_status_thresholds() {
        assert_eq!(ComplianceStatus::from_score(100), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::from_score(90), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::from_score(89), ComplianceStatus::Warning);
        assert_eq!(ComplianceStatus::from_score(70), ComplianceStatus::Warning);
        assert_eq!(ComplianceStatus::from_score(69), ComplianceStatus::NonCompliant);
        assert_eq!(ComplianceStatus::from_score(0), ComplianceStatus::NonCompliant);
    }
}
