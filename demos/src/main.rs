// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of a gridscope canvas session.
//!
//! Drives a [`GridCanvas`] through resize, wheel, drag and selection events
//! over a large warehouse-style grid and prints the status line of every
//! plan. Run with `RUST_LOG=debug` to see tier changes, index rebuilds and
//! fits.
//!
//! ```text
//! cargo run -p gridscope_demos -- [policy.json]
//! ```
//!
//! The optional argument is a JSON [`LodPolicy`]; missing fields keep their
//! defaults.

use std::error::Error;
use std::time::Duration;

use gridscope_grid::{Entity, EntityKind, GridLimits, GridSpec};
use gridscope_index::FlatScan;
use gridscope_lod::LodPolicy;
use gridscope_plan::{GridCanvas, RenderPlan, pick_entity, snap_drop};
use gridscope_view2d::ViewSettings;
use kurbo::{Point, Size, Vec2};

fn load_policy() -> Result<LodPolicy, Box<dyn Error>> {
    let policy = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            log::info!("loading LOD policy from {path}");
            serde_json::from_str(&text)?
        }
        None => LodPolicy::default(),
    };
    policy.validate()?;
    Ok(policy)
}

/// A warehouse floor: stations along the top row, bots on a lattice, and a
/// few transport units not yet placed.
fn warehouse(grid: &GridSpec) -> Vec<Entity<u32>> {
    let mut entities = Vec::new();
    let mut id = 0;
    let mut next_id = || {
        id += 1;
        id
    };
    for col in (0..grid.cols()).step_by(25) {
        entities.push(Entity::placed(
            next_id(),
            EntityKind::Station,
            grid.cell_origin(col, 0),
        ));
    }
    for row in (2..grid.rows()).step_by(9) {
        for col in (0..grid.cols()).step_by(11) {
            entities.push(Entity::placed(
                next_id(),
                EntityKind::Bot,
                grid.cell_origin(col, row),
            ));
        }
    }
    for _ in 0..5 {
        entities.push(Entity::unplaced(next_id(), EntityKind::TransportUnit));
    }
    entities
}

fn report(step: &str, plan: Option<&RenderPlan>) {
    match plan {
        Some(plan) => println!(
            "{step:<18} {} | lines: {} | coords: {} | labels: {}",
            plan.stats,
            plan.lines.len(),
            plan.coordinates.len(),
            plan.object_labels.len()
        ),
        None => println!("{step:<18} (no plan yet)"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let policy = load_policy()?;
    let grid = GridSpec::new_within(1000, 1000, 50.0, &GridLimits::default())?;
    let entities = warehouse(&grid);
    let mut revision = 1;
    println!(
        "grid {}x{} @ {} px, {} entities",
        grid.cols(),
        grid.rows(),
        grid.cell_size(),
        entities.len()
    );

    let settings = ViewSettings::default();
    let frame = Duration::from_millis(8);
    let mut now = Duration::ZERO;
    let mut canvas: GridCanvas<u32> = GridCanvas::with_config(grid, settings, policy);

    canvas.on_resize(Size::new(1280.0, 800.0), now);
    report("resize", canvas.tick(now, &entities, revision));
    now += settings.debounce;
    report("settled", canvas.tick(now, &entities, revision));

    // Three wheel notches in over the middle of the container.
    for _ in 0..3 {
        now += frame;
        canvas.on_wheel(Point::new(640.0, 400.0), -1.0, now);
        report("wheel (pending)", canvas.tick(now, &entities, revision));
    }
    now += settings.debounce;
    report("wheel settled", canvas.tick(now, &entities, revision));

    // Drag the stage a long way right and down.
    for step in 1..=10 {
        now += frame;
        let pos = Point::new(-400.0 * f64::from(step), -250.0 * f64::from(step));
        canvas.on_drag_move(pos, canvas.view().zoom(), now);
        canvas.tick(now, &entities, revision);
    }
    now += settings.debounce;
    report("drag settled", canvas.tick(now, &entities, revision));

    // Select a bot far away and let the view jump to it.
    if let Some(target) = entities.iter().rev().find(|e| e.is_placed()) {
        now += frame;
        canvas.on_select_entity(target, now);
        now += settings.debounce;
        report("selected", canvas.tick(now, &entities, revision));
    }

    // Click where the selected bot is drawn, then drop it one cell over.
    let click = canvas.view().view_to_logical(Point::new(640.0, 400.0));
    let scan = FlatScan::new(&entities, &grid);
    match pick_entity(&entities, &scan, &grid, click) {
        Some(slot) => {
            let entity = &entities[slot];
            let from = entity.position.unwrap_or_default();
            let to = snap_drop(&grid, from + Vec2::new(grid.cell_size() * 0.8, 3.0));
            println!(
                "picked {:?} #{} at ({}, {}), drop snaps to ({}, {})",
                entity.kind, entity.id, from.x, from.y, to.x, to.y
            );
        }
        None => println!("nothing under the pointer at ({:.1}, {:.1})", click.x, click.y),
    }

    // The host bumps its revision after applying the move; the next tick replans.
    revision += 1;
    now += frame;
    report("revision bump", canvas.tick(now, &entities, revision));
    println!("stale plan: {}", canvas.is_plan_stale());
    Ok(())
}
