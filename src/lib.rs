// Copyright (c) 2015-2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library for the k shortest loopless paths in weighted graphs.
//!
//! Graphs are given as dense [`AdjacencyMatrix`]es of non-negative weights,
//! where a zero entry means that there is no edge. The library computes
//!
//! - single-source shortest paths with Dijkstra's algorithm
//!   ([`shortest_paths_from`]),
//! - the $k$ shortest loopless paths between two nodes with Yen's algorithm
//!   ([`k_shortest_paths`]),
//! - the matrix of the $k$-th shortest path costs between all pairs of
//!   nodes ([`k_path_matrix`]).
//!
//! # Example
//!
//! ```
//! use rs_kpaths::{k_path_matrix, k_shortest_paths, shortest_paths_from, AdjacencyMatrix};
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 1, 4, 0],
//!     [1, 0, 2, 5],
//!     [4, 2, 0, 1],
//!     [0, 5, 1, 0],
//! ])?;
//!
//! let tree = shortest_paths_from(&g, 0)?;
//! assert_eq!(tree.distance(3), Some(4));
//! assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
//!
//! let paths = k_shortest_paths(&g, 0, 3, 2)?;
//! assert_eq!(paths[1].path, vec![0, 2, 3]);
//! assert_eq!(paths[1].cost, 5);
//!
//! let m = k_path_matrix(&g, 2);
//! assert_eq!(m.get(0, 3), Some(5));
//! # Ok::<(), rs_kpaths::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: compute the k-path matrix with `rayon`
//!   ([`k_path_matrix_par`](kpaths::kpathmatrix::k_path_matrix_par)).
//! - `serialize`: `serde` support for matrices and results.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod matrix;
pub use self::matrix::{AdjacencyMatrix, Weight};

pub mod builder;
pub use self::builder::MatrixBuilder;

pub mod adjacencies;

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod kpaths;
pub mod shortestpath;

pub use self::kpaths::{k_path_matrix, k_shortest_paths, KPathMatrix, PathCandidate, ResultSet};
#[cfg(feature = "parallel")]
pub use self::kpaths::k_path_matrix_par;
pub use self::shortestpath::{shortest_paths_from, ShortestPathTree};
