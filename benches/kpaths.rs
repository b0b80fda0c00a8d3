/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Benchmarks of single-pair and all-pairs k-shortest-path queries.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rs_kpaths::{classes, k_path_matrix, k_shortest_paths, shortest_paths_from};

use std::hint::black_box;

fn dijkstra_benchmark(c: &mut Criterion) {
    let g = classes::grid(20, 20, 1u32).unwrap();
    c.bench_function("dijkstra_grid_20x20", |b| {
        b.iter(|| shortest_paths_from(black_box(&g), 0).unwrap());
    });
}

fn yen_benchmark(c: &mut Criterion) {
    let g = classes::grid(10, 10, 1u32).unwrap();
    let mut group = c.benchmark_group("yen_grid_10x10");
    for k in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| k_shortest_paths(black_box(&g), 0, 99, k).unwrap());
        });
    }
    group.finish();
}

fn kpath_matrix_benchmark(c: &mut Criterion) {
    let g = classes::peterson(1u32).unwrap();
    c.bench_function("kpath_matrix_petersen_k3", |b| {
        b.iter(|| k_path_matrix(black_box(&g), 3));
    });

    #[cfg(feature = "parallel")]
    c.bench_function("kpath_matrix_par_petersen_k3", |b| {
        b.iter(|| rs_kpaths::k_path_matrix_par(black_box(&g), 3));
    });
}

criterion_group!(benches, dijkstra_benchmark, yen_benchmark, kpath_matrix_benchmark);
criterion_main!(benches);
