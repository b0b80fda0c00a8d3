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

//! The matrix of k-th shortest path costs between all pairs of nodes.
//!
//! The entry $(i, j)$ of the $k$-path matrix is the cost of the $k$-th
//! shortest loopless path from $i$ to $j$. If there are fewer than $k$
//! paths, the cost of the last path is used instead. The entry is `None`
//! (infinite) if $j$ is not reachable from $i$, if $i = j$ or if $k = 0$.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::{k_path_matrix, AdjacencyMatrix};
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 3, 0, 0],
//!     [3, 0, 2, 0],
//!     [0, 2, 0, 0],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! let m = k_path_matrix(&g, 2);
//! assert_eq!(m.get(0, 2), Some(5));
//! assert_eq!(m.get(0, 3), None);
//! assert_eq!(m.get(1, 1), None);
//! assert_eq!(m.to_rows_with(u32::MAX)[3], vec![u32::MAX; 4]);
//! ```

use super::yen;
use crate::matrix::{AdjacencyMatrix, Weight};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::fmt;
use std::slice::Chunks;
use tracing::debug;

/// The k-th shortest path costs between all pairs of nodes.
///
/// `None` stands for an infinite cost.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct KPathMatrix<W> {
    n: usize,
    k: usize,
    /// The costs in row-major order.
    cells: Vec<Option<W>>,
}

impl<W> KPathMatrix<W>
where
    W: Copy,
{
    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Return the rank of the paths in this matrix.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Return the cost from `i` to `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a node.
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        assert!(i < self.n && j < self.n, "Node ({}, {}) out of range", i, j);
        self.cells[i * self.n + j]
    }

    /// Return an iterator over the rows.
    pub fn rows(&self) -> Chunks<'_, Option<W>> {
        self.cells.chunks(self.n.max(1))
    }

    /// Return the matrix as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<W>>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Return the matrix as a list of rows with infinite entries replaced by
    /// `inf`.
    pub fn to_rows_with(&self, inf: W) -> Vec<Vec<W>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or(inf)).collect())
            .collect()
    }
}

impl<W> fmt::Display for KPathMatrix<W>
where
    W: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.n.max(1)).enumerate() {
            write!(fmt, "{:>4}:", i)?;
            for c in row {
                match c {
                    Some(c) => write!(fmt, " {:>6}", c)?,
                    None => write!(fmt, " {:>6}", "∞")?,
                }
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

/// Return the cost of the `k`-th path from `i` to `j`, or of the last one
/// if there are fewer.
fn kth_cost<W>(g: &AdjacencyMatrix<W>, i: usize, j: usize, k: usize) -> Option<W>
where
    W: Weight + fmt::Debug,
{
    if i == j {
        return None;
    }
    yen::start(g, i, j).take(k).last().map(|p| p.cost)
}

/// Compute the k-path matrix of `g`.
pub fn k_path_matrix<W>(g: &AdjacencyMatrix<W>, k: usize) -> KPathMatrix<W>
where
    W: Weight + fmt::Debug,
{
    let n = g.num_nodes();
    debug!(n, k, "computing k-path matrix");
    let cells = (0..n * n).map(|c| kth_cost(g, c / n, c % n, k)).collect();
    debug!(n, k, "k-path matrix finished");
    KPathMatrix { n, k, cells }
}

/// Compute the k-path matrix of `g` in parallel.
///
/// The entries are computed independently by the `rayon` thread pool. The
/// result is the same as that of [`k_path_matrix`].
#[cfg(feature = "parallel")]
pub fn k_path_matrix_par<W>(g: &AdjacencyMatrix<W>, k: usize) -> KPathMatrix<W>
where
    W: Weight + fmt::Debug + Send + Sync,
{
    let n = g.num_nodes();
    debug!(n, k, "computing k-path matrix in parallel");
    let cells = (0..n * n)
        .into_par_iter()
        .map(|c| kth_cost(g, c / n, c % n, k))
        .collect();
    debug!(n, k, "k-path matrix finished");
    KPathMatrix { n, k, cells }
}

#[cfg(test)]
mod tests {
    use super::k_path_matrix;
    use crate::shortestpath::floydwarshall;
    use crate::AdjacencyMatrix;

    fn partial() -> AdjacencyMatrix<u32> {
        AdjacencyMatrix::from_rows(&[
            [0, 3, 0, 0, 0],
            [3, 0, 2, 0, 0],
            [0, 2, 0, 4, 1],
            [0, 0, 4, 0, 5],
            [0, 0, 1, 5, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_shortest() {
        let g = partial();
        let m = k_path_matrix(&g, 1);
        let dist = floydwarshall::all_pairs(&g);
        assert_eq!(m.num_nodes(), 5);
        assert_eq!(m.k(), 1);
        for i in 0..5 {
            for j in 0..5 {
                if i == j {
                    assert_eq!(m.get(i, j), None);
                } else {
                    assert_eq!(m.get(i, j), dist[i][j].map(|x| x.0));
                }
            }
        }
    }

    #[test]
    fn test_fallback() {
        // 0 - 1 is a bridge, so there is only one path between 0 and 1
        let g = partial();
        let m = k_path_matrix(&g, 3);
        assert_eq!(m.get(0, 1), Some(3));
        // 2 -> 3: 4, 2-4-3: 6
        assert_eq!(m.get(2, 3), Some(6));
        // 0 -> 4: 0-1-2-4 = 6, 0-1-2-3-4 = 14
        assert_eq!(m.get(0, 4), Some(14));
    }

    #[test]
    fn test_zero_k() {
        let m = k_path_matrix(&partial(), 0);
        assert_eq!(m.to_rows(), vec![vec![None; 5]; 5]);
    }

    #[test]
    fn test_empty() {
        let m = k_path_matrix(&AdjacencyMatrix::<u32>::new(0), 2);
        assert_eq!(m.num_nodes(), 0);
        assert!(m.to_rows().is_empty());
        assert_eq!(format!("{}", m), "");
    }

    #[test]
    fn test_display() {
        let g = AdjacencyMatrix::from_rows(&[[0, 7], [0, 0]]).unwrap();
        let m = k_path_matrix(&g, 1);
        assert_eq!(format!("{}", m), "   0:      ∞      7\n   1:      ∞      ∞\n");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel() {
        let g = crate::classes::peterson(1u32).unwrap();
        for k in 0..4 {
            assert_eq!(super::k_path_matrix_par(&g, k), k_path_matrix(&g, k));
        }
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let m = k_path_matrix(&partial(), 2);
        let s = serde_json::to_string(&m).unwrap();
        let m2: super::KPathMatrix<u32> = serde_json::from_str(&s).unwrap();
        assert_eq!(m, m2);
    }
}
