// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll a header cell through inline, stuck, and back.
//!
//! The host here only records what it is asked to do.
//!
//! Run:
//! - `cargo run -p headliner_demos --example header_ad_basics`

use headliner_dock::cell::AdCell;
use headliner_dock::geometry::DockGeometry;
use headliner_dock::host::{CellEvent, CellHost};
use headliner_dock::types::{BannerEvent, CellPhase, ElementLayout, ElementParent};
use kurbo::Point;

#[derive(Default)]
struct PrintingHost {
    stick_surface: bool,
    moves: usize,
}

impl CellHost for PrintingHost {
    fn has_stick_surface(&self) -> bool {
        self.stick_surface
    }

    fn reparent_element(&mut self, from: ElementParent, to: ElementParent, layout: ElementLayout) {
        self.moves += 1;
        println!("  move {from:?} -> {to:?} ({layout:?})");
    }

    fn re_layout(&mut self) {
        println!("  re-layout");
    }
}

fn main() {
    headliner_demos::init_tracing();

    let geometry = DockGeometry::with_default_ratios(360.0).expect("valid default geometry");
    println!(
        "max height {:.2}, docks at {:.2} (offset {:.2})",
        geometry.max_height(),
        geometry.min_height(),
        geometry.docking_offset()
    );

    let mut host = PrintingHost {
        stick_surface: true,
        ..Default::default()
    };
    let mut cell: AdCell<&str, &str, Vec<CellEvent<&str, &str>>> = AdCell::new(geometry);
    let _ = cell.attach(&mut host);

    for y in [0.0, 150.0, 150.0, 50.0] {
        let changes = cell.on_scroll(Point::new(0.0, y), &mut host);
        println!(
            "y = {y:>6.1}: {:?}, height {:.2}, changes {changes:?}",
            cell.phase(),
            cell.current_height()
        );
    }
    assert_eq!(cell.phase(), CellPhase::Inline);
    assert_eq!(host.moves, 3);

    let _ = cell.handle_banner_event(BannerEvent::Loaded("ad-1"), &mut host);
    let _ = cell.handle_banner_event(BannerEvent::CloseRequested, &mut host);
    println!("== Notifications ==\n  {:?}", cell.listener());
    assert_eq!(cell.phase(), CellPhase::Closed);
    assert_eq!(
        cell.listener(),
        &vec![CellEvent::Loaded("ad-1"), CellEvent::Closed]
    );
}
