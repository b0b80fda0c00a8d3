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

//! K shortest loopless paths.
//!
//! The $k$ shortest paths between two nodes are computed with the algorithm
//! of Yen. The first path is a shortest path found by
//! [Dijkstra's algorithm](crate::shortestpath::dijkstra). Each further path
//! deviates from one of the already confirmed paths at some *spur node*: the
//! part up to the spur node (the *root path*) is kept, the remainder is a
//! shortest path in the graph with the root nodes and the edges used by
//! confirmed paths with the same root removed.
//!
//! Paths are *simple* (loopless), i.e. no node is visited twice.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::{k_shortest_paths, AdjacencyMatrix};
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 4, 2, 0, 0],
//!     [4, 0, 1, 5, 0],
//!     [2, 1, 0, 8, 10],
//!     [0, 5, 8, 0, 2],
//!     [0, 0, 10, 2, 0],
//! ]).unwrap();
//!
//! let paths = k_shortest_paths(&g, 0, 4, 3).unwrap();
//! assert_eq!(paths.iter().map(|p| p.cost).collect::<Vec<_>>(), vec![10, 11, 12]);
//! assert_eq!(paths[0].path, vec![0, 2, 1, 3, 4]);
//! assert_eq!(paths[1].path, vec![0, 1, 3, 4]);
//! ```

pub mod kpathmatrix;
pub mod yen;

#[cfg(feature = "parallel")]
pub use self::kpathmatrix::k_path_matrix_par;
pub use self::kpathmatrix::{k_path_matrix, KPathMatrix};
pub use self::yen::{k_shortest_paths, Yen};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::fmt;

/// A path together with its length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PathCandidate<W> {
    /// The sum of the edge weights along the path.
    pub cost: W,
    /// The nodes of the path from source to target.
    pub path: Vec<usize>,
}

/// The paths found by a k-shortest-path query.
///
/// The paths are sorted by non-decreasing cost and pairwise distinct.
pub type ResultSet<W> = Vec<PathCandidate<W>>;

impl<W> fmt::Display for PathCandidate<W>
where
    W: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, u) in self.path.iter().enumerate() {
            if i > 0 {
                write!(fmt, " -> ")?;
            }
            write!(fmt, "{}", u)?;
        }
        write!(fmt, " (cost {})", self.cost)
    }
}
