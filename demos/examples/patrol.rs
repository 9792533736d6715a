// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A patrolling entity walking through a sentry's box and out the other side.
//!
//! Demonstrates the full per-cycle rhythm a host update loop drives:
//! re-derive rectangles once per cycle, rescan entities that moved, then
//! retire separated contacts at cycle end. Run with:
//!
//! ```sh
//! cargo run -p graze_demos --example patrol
//! ```

use std::collections::HashMap;

use graze_broadphase::{Broadphase, ParticipantFlags, ScanMode};
use graze_contact::ContactSink;
use graze_demos::{ColliderShape, derive_aabb};
use kurbo::{Point, Size, Vec2};

/// Prints transitions the way an engine debug log would.
struct LogSink {
    cycle: u32,
}

impl ContactSink<&'static str> for LogSink {
    fn enter(&mut self, entity: &'static str, partner: &'static str) {
        println!("[cycle {}] {entity} collided with {partner}", self.cycle);
    }

    fn exit(&mut self, entity: &'static str, partner: &'static str) {
        println!("[cycle {}] {entity} separated from {partner}", self.cycle);
    }
}

fn main() {
    let shape = ColliderShape::centered(Size::new(2.0, 2.0));
    let scale = Vec2::new(1.0, 1.0);

    let mut positions: HashMap<&'static str, Point> = HashMap::new();
    positions.insert("patrol", Point::new(-4.0, 0.0));
    positions.insert("sentry", Point::new(0.0, 0.0));
    positions.insert("beacon", Point::new(0.5, 0.5));

    let mut bp: Broadphase<&'static str, f64> = Broadphase::new();
    let flags = ParticipantFlags::COLLIDABLE | ParticipantFlags::EXIT_EVENTS;
    for (&name, &pos) in &positions {
        bp.track_with_flags(name, derive_aabb(shape, pos, scale), flags)
            .expect("names are unique");
    }

    // The beacon overlaps the sentry but has collision disabled: no events.
    bp.set_flags("beacon", ParticipantFlags::EXIT_EVENTS)
        .expect("beacon is tracked");

    let mut last_positions = positions.clone();
    let mut sink = LogSink { cycle: 0 };

    for cycle in 0..8 {
        sink.cycle = cycle;

        // The patrol walks right one unit per cycle.
        if let Some(pos) = positions.get_mut("patrol") {
            pos.x += 1.0;
        }

        // Re-derive every footprint once per cycle.
        bp.refresh_all(|name| derive_aabb(shape, positions[name], scale));

        // Movement-triggered rescan: only entities that moved announce.
        for (&name, &pos) in &positions {
            if last_positions[name] != pos {
                last_positions.insert(name, pos);
                let query = bp.aabb_of(name).expect("tracked");
                bp.scan(name, query, ScanMode::Announce, &mut sink)
                    .expect("tracked");
            }
        }

        // Retire contacts that separated this cycle.
        bp.end_cycle(&mut sink);
    }

    // A localized query against an ad-hoc snapshot: which wall tiles does
    // the patrol's final footprint touch? The tiles are never tracked.
    let tiles: graze_registry::Snapshot<&'static str, f64> = [
        ("tile_3", derive_aabb(shape, Point::new(3.0, 0.0), scale)),
        ("tile_9", derive_aabb(shape, Point::new(9.0, 0.0), scale)),
    ]
    .into_iter()
    .collect();

    let footprint = bp.aabb_of("patrol").expect("tracked");
    graze_broadphase::visit_overlaps("patrol", &footprint, &tiles, |tile, _| {
        println!("patrol rests against {tile}");
    });
}
