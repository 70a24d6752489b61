// ==========================================
// 钣喷维修成本引擎 - 面板喷漆工时表
// ==========================================
// 静态参考数据: 前处理 / 喷涂 / 收尾工时（小时）与喷涂面积（平方英尺）
// ==========================================

use crate::domain::paint::PanelPaintProfile;

// (面板名称, 前处理, 喷涂, 收尾, 面积)
const PANEL_TABLE: &[(&str, f64, f64, f64, f64)] = &[
    ("Hood", 0.5, 0.8, 0.3, 12.0),
    ("Roof", 0.7, 1.0, 0.4, 16.0),
    ("Trunk Lid", 0.4, 0.7, 0.3, 10.0),
    ("Tailgate", 0.5, 0.8, 0.3, 12.0),
    ("Front Bumper", 0.6, 0.9, 0.3, 10.0),
    ("Rear Bumper", 0.6, 0.9, 0.3, 10.0),
    ("Left Front Fender", 0.4, 0.6, 0.2, 7.0),
    ("Right Front Fender", 0.4, 0.6, 0.2, 7.0),
    ("Left Front Door", 0.5, 0.7, 0.3, 9.0),
    ("Right Front Door", 0.5, 0.7, 0.3, 9.0),
    ("Left Rear Door", 0.5, 0.7, 0.3, 8.0),
    ("Right Rear Door", 0.5, 0.7, 0.3, 8.0),
    ("Left Quarter Panel", 0.6, 0.8, 0.3, 11.0),
    ("Right Quarter Panel", 0.6, 0.8, 0.3, 11.0),
    ("Left Rocker Panel", 0.3, 0.4, 0.2, 3.0),
    ("Right Rocker Panel", 0.3, 0.4, 0.2, 3.0),
    ("Left Mirror Cover", 0.2, 0.3, 0.1, 1.0),
    ("Right Mirror Cover", 0.2, 0.3, 0.1, 1.0),
];

fn to_profile(entry: &(&str, f64, f64, f64, f64)) -> PanelPaintProfile {
    let (name, prep, paint, finish, sqft) = *entry;
    PanelPaintProfile::new(name, prep, paint, finish, sqft)
}

/// 按名称查找面板（忽略大小写与首尾空白）
pub fn panel_profile(name: &str) -> Option<PanelPaintProfile> {
    let wanted = name.trim();
    PANEL_TABLE
        .iter()
        .find(|entry| entry.0.eq_ignore_ascii_case(wanted))
        .map(to_profile)
}

/// 全部面板（表内顺序）
pub fn all_panels() -> Vec<PanelPaintProfile> {
    PANEL_TABLE.iter().map(to_profile).collect()
}
