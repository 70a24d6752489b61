// ==========================================
// 钣喷维修成本引擎 - 本地化文案
// ==========================================
// 语言包: locales/zh-CN.yml（默认）, locales/en.yml
// 输出中的状态/原因/扣分说明均经此模块生成
// ==========================================

use crate::domain::types::{ComplianceStatus, UnfulfillableReason};

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 切换输出语言
///
/// 不支持的语言代码返回 false，当前语言保持不变
pub fn set_locale(locale: &str) -> bool {
    if !SUPPORTED_LOCALES.contains(&locale) {
        tracing::warn!(locale, "不支持的语言，保持当前设置");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 合规状态文案
pub fn status_label(status: ComplianceStatus) -> String {
    let key = match status {
        ComplianceStatus::Compliant => "compliance.status.compliant",
        ComplianceStatus::Warning => "compliance.status.warning",
        ComplianceStatus::NonCompliant => "compliance.status.non_compliant",
    };
    rust_i18n::t!(key).to_string()
}

/// 无法采购原因文案
pub fn unfulfillable_label(reason: UnfulfillableReason) -> String {
    let key = match reason {
        UnfulfillableReason::NoOffers => "cart.unfulfillable.no_offers",
        UnfulfillableReason::OutOfStock => "cart.unfulfillable.out_of_stock",
    };
    rust_i18n::t!(key).to_string()
}

/// 带参数的文案，占位符写作 `%{name}`
///
/// ```no_run
/// use collision_cost_engine::i18n::t_with_args;
/// let reason = t_with_args("compliance.deduction.overdue_requirements", &[("count", "2")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(rust_i18n::t!(key).to_string(), |text, (name, value)| {
            text.replace(&format!("%{{{}}}", name), value)
        })
}
