// ==========================================
// PaintEstimator 集成测试
// ==========================================
// 测试目标: 总额一致性、明细合计、漆种单调性、驳口开关
// ==========================================

mod helpers;

use collision_cost_engine::config::{BlendPolicy, PaintRateConfig};
use collision_cost_engine::domain::paint::PaintJobRequest;
use collision_cost_engine::domain::types::PaintType;
use collision_cost_engine::engine::{all_panels, calculate_paint_estimate, EngineError, PaintEstimator};
use helpers::test_data_builder::{hood, paint_request};

const EPS: f64 = 1e-6;

// ==========================================
// 场景 1: 单个引擎盖、素色漆
// ==========================================

#[test]
fn test_single_hood_solid() {
    collision_cost_engine::logging::init_test();
    println!("\n=== 测试：单个引擎盖、素色漆 ===");

    let request = PaintJobRequest {
        panels: vec![hood()],
        paint_type: PaintType::Solid,
        labor_rate: 65.0,
        include_blend: false,
    };
    let result = calculate_paint_estimate(&request).unwrap();

    println!("  - 总工时: {}", result.total_labor_hours);
    println!("  - 工时费: {}", result.total_labor_cost);
    println!("  - 材料费: {}", result.total_material_cost);

    assert!((result.total_labor_hours - 1.6).abs() < EPS);
    assert!((result.total_labor_cost - 104.0).abs() < EPS);
    // 12 ft² × 6.60 × 1.0
    assert!((result.total_material_cost - 79.2).abs() < EPS);
    assert!((result.total_cost - 183.2).abs() < EPS);
    assert_eq!(result.blend_hours, 0.0);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 性质: 总额 = 工时费 + 材料费
// ==========================================

#[test]
fn test_total_consistency_for_every_panel_and_type() {
    let estimator = PaintEstimator::default();
    for panel in all_panels() {
        for paint_type in PaintType::ALL {
            for include_blend in [false, true] {
                let request = PaintJobRequest {
                    panels: vec![panel.clone(), hood()],
                    paint_type,
                    labor_rate: 72.5,
                    include_blend,
                };
                let result = estimator.calculate_estimate(&request).unwrap();
                assert!(
                    (result.total_cost - (result.total_labor_cost + result.total_material_cost)).abs()
                        < EPS,
                    "总额不一致: {} {:?}",
                    panel.part_name,
                    paint_type
                );
            }
        }
    }
}

#[test]
fn test_panel_breakdown_sums_to_total() {
    let request = paint_request(
        &["Hood", "Front Bumper", "Left Front Fender", "Left Front Door", "Roof"],
        PaintType::Pearl,
        58.0,
        true,
    );
    let result = calculate_paint_estimate(&request).unwrap();

    assert_eq!(result.panel_breakdown.len(), 5);
    assert_eq!(result.panel_breakdown[0].part_name, "Hood");
    assert_eq!(result.panel_breakdown[4].part_name, "Roof");

    let sum: f64 = result.panel_breakdown.iter().map(|p| p.total_cost).sum();
    assert!((sum - result.total_cost).abs() < 1e-2);

    // 展示副本取整后仍满足
    let rounded = result.rounded();
    let rounded_sum: f64 = rounded.panel_breakdown.iter().map(|p| p.total_cost).sum();
    assert!((rounded_sum - rounded.total_cost).abs() < 0.05);
}

#[test]
fn test_paint_type_monotonicity() {
    let cost = |paint_type| {
        calculate_paint_estimate(&paint_request(&["Hood", "Trunk Lid"], paint_type, 60.0, false))
            .unwrap()
            .total_cost
    };

    let solid = cost(PaintType::Solid);
    let metallic = cost(PaintType::Metallic);
    let pearl = cost(PaintType::Pearl);
    let tri_coat = cost(PaintType::TriCoat);

    println!("素色 {} < 金属 {} < 珠光 {} < 三工序 {}", solid, metallic, pearl, tri_coat);
    assert!(solid < metallic);
    assert!(metallic < pearl);
    assert!(pearl < tri_coat);
}

#[test]
fn test_single_panel_blend_invariance() {
    for panel in all_panels() {
        let without = PaintJobRequest {
            panels: vec![panel.clone()],
            paint_type: PaintType::Metallic,
            labor_rate: 80.0,
            include_blend: false,
        };
        let with = PaintJobRequest {
            include_blend: true,
            ..without.clone()
        };
        let a = calculate_paint_estimate(&without).unwrap();
        let b = calculate_paint_estimate(&with).unwrap();
        assert_eq!(a, b, "单面板驳口开关不应影响结果: {}", panel.part_name);
    }
}

#[test]
fn test_configured_blend_policy() {
    // 驳口工时 = 喷涂工时 × 50%
    let config = PaintRateConfig {
        blend_policy: BlendPolicy::PaintTimeRatio(0.5),
        ..PaintRateConfig::default()
    };
    let estimator = PaintEstimator::new(config);

    let mut request = paint_request(&["Hood", "Hood"], PaintType::Solid, 100.0, true);
    let result = estimator.calculate_estimate(&request).unwrap();
    assert!((result.blend_hours - 0.4).abs() < EPS);
    assert!((result.blend_labor_cost - 40.0).abs() < EPS);

    request.include_blend = false;
    let result = estimator.calculate_estimate(&request).unwrap();
    assert_eq!(result.blend_hours, 0.0);
}

#[test]
fn test_invalid_inputs_name_the_field() {
    let empty = PaintJobRequest {
        panels: vec![],
        paint_type: PaintType::Solid,
        labor_rate: 65.0,
        include_blend: false,
    };
    let err = calculate_paint_estimate(&empty).unwrap_err();
    assert_eq!(err.field(), "panels");

    let zero_rate = PaintJobRequest {
        panels: vec![hood()],
        labor_rate: 0.0,
        ..empty.clone()
    };
    let err = calculate_paint_estimate(&zero_rate).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "laborRate"));
}
