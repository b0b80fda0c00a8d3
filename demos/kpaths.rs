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

use rustop::opts;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use rs_kpaths::{classes, k_shortest_paths, AdjacencyMatrix, KPathMatrix};

use std::error::Error;

fn builtin(name: &str) -> Result<AdjacencyMatrix<u32>, Box<dyn Error>> {
    let g = match name {
        "practice" => AdjacencyMatrix::from_rows(&[
            [0, 4, 2, 0, 0],
            [4, 0, 1, 5, 0],
            [2, 1, 0, 8, 10],
            [0, 5, 8, 0, 2],
            [0, 0, 10, 2, 0],
        ]),
        "small" => AdjacencyMatrix::from_rows(&[[0, 1, 4, 0], [1, 0, 2, 5], [4, 2, 0, 1], [0, 5, 1, 0]]),
        "partial" => AdjacencyMatrix::from_rows(&[
            [0, 3, 0, 0, 0],
            [3, 0, 2, 0, 0],
            [0, 2, 0, 4, 1],
            [0, 0, 4, 0, 5],
            [0, 0, 1, 5, 0],
        ]),
        "large" => AdjacencyMatrix::from_rows(&[
            [0, 7, 9, 0, 0, 14],
            [7, 0, 10, 15, 0, 0],
            [9, 10, 0, 11, 0, 2],
            [0, 15, 11, 0, 6, 0],
            [0, 0, 0, 6, 0, 9],
            [14, 0, 2, 0, 9, 0],
        ]),
        "comparison" => AdjacencyMatrix::from_rows(&[
            [0, 2, 4, 0, 0, 0],
            [2, 0, 1, 4, 0, 0],
            [4, 1, 0, 1, 5, 0],
            [0, 4, 1, 0, 1, 3],
            [0, 0, 5, 1, 0, 2],
            [0, 0, 0, 3, 2, 0],
        ]),
        "cycle" => classes::cycle(8, 1),
        "grid" => classes::grid(4, 3, 1),
        "petersen" => classes::peterson(1),
        _ => return Err(format!("Unknown graph: {}", name).into()),
    }?;
    Ok(g)
}

#[cfg(feature = "parallel")]
fn compute_matrix(g: &AdjacencyMatrix<u32>, k: usize) -> KPathMatrix<u32> {
    rs_kpaths::k_path_matrix_par(g, k)
}

#[cfg(not(feature = "parallel"))]
fn compute_matrix(g: &AdjacencyMatrix<u32>, k: usize) -> KPathMatrix<u32> {
    rs_kpaths::k_path_matrix(g, k)
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute the k shortest loopless paths in a built-in graph.";
        opt k:usize=3, desc:"Maximal rank of the paths.";
        opt src:usize=0, desc:"Source node of the path query.";
        opt dst:Option<usize>, desc:"Target node of the path query.";
        param graph:Option<String>, desc:"Graph (practice, small, partial, large, comparison, cycle, grid, petersen)";
    }
    .parse_or_exit();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let name = args.graph.unwrap_or_else(|| "practice".to_string());
    let g = builtin(&name)?;

    println!("Graph: {}", name);
    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of edges: {}", g.num_edges());
    println!("  undirected: {}", g.is_undirected());
    print!("{}", g);

    for k in 1..=args.k {
        let tstart = OffsetDateTime::now_utc();
        let m = compute_matrix(&g, k);
        let tend = OffsetDateTime::now_utc();
        println!();
        println!("{}-path matrix (time: {})", k, (tend - tstart).as_seconds_f64());
        print!("{}", m);
    }

    let dst = args.dst.unwrap_or_else(|| g.num_nodes().saturating_sub(1));
    let paths = k_shortest_paths(&g, args.src, dst, args.k)?;
    println!();
    if paths.is_empty() {
        println!("No path from {} to {}", args.src, dst);
    } else {
        println!("The {} shortest paths from {} to {}:", paths.len(), args.src, dst);
        for (i, p) in paths.iter().enumerate() {
            println!("  #{}: {}", i + 1, p);
        }
    }

    Ok(())
}
