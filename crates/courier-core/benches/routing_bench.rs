//! Criterion benchmarks for the routing engine.
//!
//! Two benchmark groups:
//! - `grid_city`: 32x32 lattice (1024 locations, ~2000 segments) -- the
//!   label-correcting worst case lives on long detour-heavy grids.
//! - `parallel_heavy`: a small city where every pair carries many parallel
//!   segments, stressing redundant re-relaxation.

use courier_core::graph::CityGraph;
use courier_core::id::LocationId;
use courier_core::routing::RouteTable;
use criterion::{Criterion, criterion_group, criterion_main};

fn loc(i: u32) -> LocationId {
    LocationId(i)
}

/// Build an n x n lattice with mildly varied weights.
fn build_grid(n: u32) -> CityGraph {
    let mut graph = CityGraph::new();
    let at = |x: u32, y: u32| loc(y * n + x);

    for y in 0..n {
        for x in 0..n {
            let w = 1 + (x * 7 + y * 13) % 9;
            if x + 1 < n {
                graph.add_edge(at(x, y), at(x + 1, y), w);
            }
            if y + 1 < n {
                graph.add_edge(at(x, y), at(x, y + 1), w + 1);
            }
        }
    }
    graph
}

/// Build a 12-location city with 40 parallel segments per pair.
fn build_parallel_heavy() -> CityGraph {
    let mut graph = CityGraph::new();
    for u in 0..12u32 {
        for v in (u + 1)..12u32 {
            for k in 0..40u32 {
                graph.add_edge(loc(u), loc(v), 1 + (u + v + k) % 50);
            }
        }
    }
    graph
}

fn bench_grid_city(c: &mut Criterion) {
    let graph = build_grid(32);
    let corner = loc(0);
    let far_corner = loc(32 * 32 - 1);

    c.bench_function("grid_city_compute", |b| {
        b.iter(|| RouteTable::compute(&graph, corner))
    });

    let table = RouteTable::compute(&graph, corner);
    c.bench_function("grid_city_path_to", |b| {
        b.iter(|| table.path_to(far_corner))
    });
}

fn bench_parallel_heavy(c: &mut Criterion) {
    let graph = build_parallel_heavy();

    c.bench_function("parallel_heavy_compute", |b| {
        b.iter(|| RouteTable::compute(&graph, loc(0)))
    });
}

criterion_group!(benches, bench_grid_city, bench_parallel_heavy);
criterion_main!(benches);
