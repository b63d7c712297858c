// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweeps over grids and viewports checking the invariants the planner relies on.

use gridscope_grid::{GridSpec, Viewport};
use gridscope_lod::{LodPolicy, PerformanceTier, classify, resolve_render_config};

fn grids() -> Vec<GridSpec> {
    [(1, 1, 50.0), (10, 10, 50.0), (300, 400, 20.0), (1000, 1000, 2.0), (1000, 1000, 200.0)]
        .into_iter()
        .map(|(r, c, s)| GridSpec::new(r, c, s).unwrap())
        .collect()
}

fn viewports() -> Vec<Viewport> {
    let mut out = vec![Viewport::default()];
    for x in [-5_000.0, -1.0, 0.0, 33.3, 1_234.5, 99_999.0] {
        for y in [-250.0, 0.0, 17.0, 40_000.0] {
            for (w, h) in [(1.0, 1.0), (800.0, 600.0), (3840.0, 2160.0)] {
                out.push(Viewport::new(x, y, w, h));
            }
        }
    }
    out
}

#[test]
fn visible_range_always_inside_grid() {
    let policy = LodPolicy::default();
    for grid in grids() {
        for vp in viewports() {
            for tier in [PerformanceTier::Low, PerformanceTier::Medium, PerformanceTier::High] {
                let r = policy.visible_range(&vp, &grid, tier);
                assert!(r.is_within(&grid), "{r:?} escapes {grid:?} for {vp:?}");
            }
        }
    }
}

#[test]
fn huge_grid_is_low_at_every_zoom() {
    let grid = GridSpec::new(1000, 1000, 50.0).unwrap();
    for vp in viewports() {
        let tier = classify(&grid, &vp);
        assert_eq!(tier, PerformanceTier::Low);
        for zoom in [0.5, 1.0, 1.5] {
            let config = resolve_render_config(tier, zoom, grid.cell_size());
            assert!(config.max_visible_objects <= 500);
        }
    }
}

#[test]
fn coordinate_step_is_never_zero() {
    for tier in [PerformanceTier::Low, PerformanceTier::Medium, PerformanceTier::High] {
        for cell in [0.001, 1.0, 7.5, 25.0, 1e9] {
            assert!(resolve_render_config(tier, 1.0, cell).coordinate_step >= 1);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn policy_loads_from_partial_json() {
    let policy: LodPolicy = serde_json::from_str(r#"{"index_threshold": 100}"#).unwrap();
    assert_eq!(policy.index_threshold, 100);
    assert_eq!(policy.budgets, LodPolicy::default().budgets);
    assert!(policy.validate().is_ok());
}
