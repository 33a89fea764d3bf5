// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use headliner_dock::adapters::surface_tree::SurfaceHost;
use headliner_dock::cell::AdCell;
use headliner_dock::geometry::DockGeometry;
use headliner_dock::host::CellHost;
use headliner_dock::types::{ElementLayout, ElementParent};
use headliner_surface::{LocalSurface, SurfaceTree};
use kurbo::{Point, Rect};

#[derive(Default)]
struct CountingHost {
    moves: u64,
}

impl CellHost for CountingHost {
    fn has_stick_surface(&self) -> bool {
        true
    }

    fn reparent_element(
        &mut self,
        _from: ElementParent,
        _to: ElementParent,
        _layout: ElementLayout,
    ) {
        self.moves += 1;
    }

    fn re_layout(&mut self) {}
}

/// Offsets sweeping down past the docking point and back up, `n` ticks each way.
fn sweep(n: usize, max: f64) -> Vec<Point> {
    let step = max / n as f64;
    (0..n)
        .map(|i| i as f64 * step)
        .chain((0..n).rev().map(|i| i as f64 * step))
        .map(|y| Point::new(0.0, y))
        .collect()
}

fn bench_state_machine(c: &mut Criterion) {
    let geometry = DockGeometry::with_default_ratios(390.0).unwrap();
    let mut group = c.benchmark_group("state_machine");
    for &n in &[100_usize, 1_000, 10_000] {
        let offsets = sweep(n, 400.0);
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(format!("sweep_{n}"), |b| {
            b.iter_batched(
                || (AdCell::<(), ()>::new(geometry), CountingHost::default()),
                |(mut cell, mut host)| {
                    let _ = cell.attach(&mut host);
                    for &offset in &offsets {
                        black_box(cell.on_scroll(offset, &mut host));
                    }
                    black_box(host.moves)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_surface_host(c: &mut Criterion) {
    let geometry = DockGeometry::with_default_ratios(390.0).unwrap();
    let offsets = sweep(1_000, 400.0);
    let mut group = c.benchmark_group("surface_host");
    group.throughput(Throughput::Elements(offsets.len() as u64));
    group.bench_function("sweep_sync_commit_1000", |b| {
        b.iter_batched(
            || {
                let mut tree = SurfaceTree::new();
                let screen = tree.insert(
                    None,
                    LocalSurface {
                        local_bounds: Rect::new(0.0, 0.0, 390.0, 844.0),
                        ..Default::default()
                    },
                );
                let container = tree.insert(
                    Some(screen),
                    LocalSurface {
                        local_bounds: Rect::new(0.0, 0.0, 390.0, geometry.max_height()),
                        ..Default::default()
                    },
                );
                let element = tree.insert(None, LocalSurface::default());
                (tree, screen, container, element)
            },
            |(mut tree, screen, container, element)| {
                let mut host =
                    SurfaceHost::new(&mut tree, container, element).with_stick_surface(screen);
                let mut cell = AdCell::<(), ()>::new(geometry);
                let _ = cell.attach(&mut host);
                for &offset in &offsets {
                    let _ = cell.on_scroll(offset, &mut host);
                    host.sync_container(&cell.state());
                    host.re_layout();
                }
                black_box(host.take_damage().dirty_rects.len())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_state_machine, bench_surface_host);
criterion_main!(benches);
