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

//! Some common graph classes.
//!
//! All graphs are undirected, i.e. the matrices are symmetric, and every
//! edge gets the same weight `w`.

use crate::builder::MatrixBuilder;
use crate::error::Result;
use crate::matrix::{AdjacencyMatrix, Weight};

/// Returns a path with `m` edges.
pub fn path<W>(m: usize, w: W) -> Result<AdjacencyMatrix<W>>
where
    W: Weight,
{
    let mut b = MatrixBuilder::with_capacities(m + 1, 2 * m);
    let nodes = b.add_nodes(m + 1);
    for (&u, &v) in nodes.iter().zip(nodes.iter().skip(1)) {
        b.add_undirected_edge(u, v, w);
    }
    b.into_matrix()
}

/// Returns a cycle with length `n`.
pub fn cycle<W>(n: usize, w: W) -> Result<AdjacencyMatrix<W>>
where
    W: Weight,
{
    let mut b = MatrixBuilder::with_capacities(n, 2 * n);
    let nodes = b.add_nodes(n);
    for (&u, &v) in nodes.iter().zip(nodes.iter().cycle().skip(1)) {
        b.add_undirected_edge(u, v, w);
    }
    b.into_matrix()
}

/// Returns the complete graph on `n` nodes.
pub fn complete_graph<W>(n: usize, w: W) -> Result<AdjacencyMatrix<W>>
where
    W: Weight,
{
    let mut b = MatrixBuilder::with_capacities(n, n * n.saturating_sub(1));
    let nodes = b.add_nodes(n);
    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            b.add_undirected_edge(u, v, w);
        }
    }
    b.into_matrix()
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The nodes are created from left to right and from bottom to top. The
/// following is a grid graph with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// ```
/// use rs_kpaths::classes;
///
/// let g = classes::grid(5, 4, 1).unwrap();
/// assert_eq!(g.num_nodes(), 20);
/// assert_eq!(g.num_edges(), 2 * (5*3 + 4*4));
///
/// let degree = |u| g.row(u).iter().filter(|&&w| w > 0).count();
/// assert_eq!((0..20).filter(|&u| degree(u) == 2).count(), 4);
/// assert_eq!((0..20).filter(|&u| degree(u) == 3).count(), 10);
/// assert_eq!((0..20).filter(|&u| degree(u) == 4).count(), 6);
/// ```
pub fn grid<W>(n: usize, m: usize, w: W) -> Result<AdjacencyMatrix<W>>
where
    W: Weight,
{
    let mut b = MatrixBuilder::with_capacities(n * m, 4 * n * m);
    let nodes = b.add_nodes(n * m);
    for x in 0..n.saturating_sub(1) {
        for y in 0..m {
            b.add_undirected_edge(nodes[y * n + x], nodes[y * n + x + 1], w);
        }
    }
    for x in 0..n {
        for y in 0..m.saturating_sub(1) {
            b.add_undirected_edge(nodes[y * n + x], nodes[y * n + x + n], w);
        }
    }
    b.into_matrix()
}

/// Returns a Petersen graph.
pub fn peterson<W>(w: W) -> Result<AdjacencyMatrix<W>>
where
    W: Weight,
{
    let mut b = MatrixBuilder::with_capacities(10, 30);
    let nodes = b.add_nodes(10);
    for i in 0..5 {
        b.add_undirected_edge(nodes[i], nodes[(i + 1) % 5], w);
        b.add_undirected_edge(nodes[i + 5], nodes[(i + 2) % 5 + 5], w);
        b.add_undirected_edge(nodes[i], nodes[i + 5], w);
    }
    b.into_matrix()
}

#[cfg(test)]
mod tests {
    use super::{complete_graph, cycle, path, peterson};
    use crate::AdjacencyMatrix;
    use std::cmp::{max, min};

    fn degrees(g: &AdjacencyMatrix<u32>) -> Vec<usize> {
        g.rows().map(|row| row.iter().filter(|&&w| w > 0).count()).collect()
    }

    #[test]
    fn test_path() {
        let g = path(5, 1u32).unwrap();
        assert_eq!(g.num_nodes(), 6);
        assert_eq!(g.num_edges(), 10);
        assert!(g.is_undirected());
        for u in 0..6 {
            for v in 0..6 {
                assert_eq!(g.has_edge(u, v), min(u, v) + 1 == max(u, v));
            }
        }
        let degrees = degrees(&g);
        assert_eq!(degrees.iter().filter(|x| **x == 1).count(), 2);
        assert_eq!(degrees.iter().filter(|x| **x == 2).count(), g.num_nodes() - 2);
    }

    #[test]
    fn test_cycle() {
        let g = cycle(42, 3u32).unwrap();
        assert_eq!(g.num_nodes(), 42);
        assert_eq!(g.num_edges(), 84);
        assert!(g.is_undirected());
        assert_eq!(g.weight(41, 0), 3);
        assert!(degrees(&g).into_iter().all(|x| x == 2));
    }

    #[test]
    fn test_complete() {
        let n = 12;
        let g = complete_graph(n, 1u32).unwrap();
        assert_eq!(g.num_nodes(), n);
        assert_eq!(g.num_edges(), n * (n - 1));
        assert!(g.is_undirected());
        assert!(degrees(&g).into_iter().all(|x| x == n - 1));
    }

    #[test]
    fn test_peterson() {
        let g = peterson(1u32).unwrap();
        assert_eq!(g.num_nodes(), 10);
        assert_eq!(g.num_edges(), 30);
        assert!(g.is_undirected());
        assert!(degrees(&g).into_iter().all(|x| x == 3));
    }
}
