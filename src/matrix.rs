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

//! Weighted graphs stored as dense adjacency matrices.
//!
//! An [`AdjacencyMatrix`] with $n$ nodes stores one weight $w_{uv}$ for each
//! ordered pair of nodes. A positive entry $w_{uv} > 0$ is an edge from $u$ to
//! $v$, the value $0$ means that there is no edge. Hence, an edge of weight
//! zero cannot be represented.
//!
//! Undirected graphs are represented by symmetric matrices. The algorithms
//! only ever read $w_{uv}$ when traversing from $u$ to $v$, so they work for
//! directed graphs, too.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::AdjacencyMatrix;
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 4, 2],
//!     [4, 0, 1],
//!     [2, 1, 0],
//! ]).unwrap();
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 6);
//! assert!(g.is_undirected());
//! assert_eq!(g.path_cost(&[0, 2, 1]), Some(3));
//! assert_eq!(g.path_cost(&[0, 0]), None);
//! ```

use crate::error::{Error, Result};
use crate::num::traits::{CheckedAdd, Float, Zero};

use ordered_float::NotNan;

use std::convert::TryFrom;
use std::fmt;
use std::slice::Chunks;

/// The type of edge weights.
///
/// Weights must be non-negative. The trait is implemented for all primitive
/// integers and floats and for `ordered_float::NotNan`.
pub trait Weight: Copy + PartialOrd + Zero {
    /// Return `self + w` or `None` if the sum cannot be represented.
    ///
    /// Integer sums are checked for overflow. Float sums never fail, they
    /// saturate at infinity.
    fn checked_sum(self, w: Self) -> Option<Self>;
}

macro_rules! int_weight {
    ($($t:ty),*) => {
        $(impl Weight for $t {
            fn checked_sum(self, w: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &w)
            }
        })*
    };
}

int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for f32 {
    fn checked_sum(self, w: Self) -> Option<Self> {
        Some(self + w)
    }
}

impl Weight for f64 {
    fn checked_sum(self, w: Self) -> Option<Self> {
        Some(self + w)
    }
}

impl<T> Weight for NotNan<T>
where
    T: Float,
{
    fn checked_sum(self, w: Self) -> Option<Self> {
        // both are non-negative, so the sum is never NaN
        Some(self + w)
    }
}

/// Return `true` if `w` is an admissible weight.
///
/// This rejects negative values and, for floating point types, `NaN`.
fn is_valid_weight<W: Weight>(w: W) -> bool {
    w >= W::zero()
}

/// A square matrix of non-negative edge weights.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix<W> {
    /// The number of nodes.
    n: usize,
    /// The weights in row-major order.
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Create a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        AdjacencyMatrix {
            n,
            weights: vec![W::zero(); n * n],
        }
    }

    /// Create a graph from a list of rows.
    ///
    /// Fails if the rows do not form a square matrix or if some weight is
    /// negative.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[W]>,
    {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(Error::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            if let Some(j) = row.iter().position(|&w| !is_valid_weight(w)) {
                return Err(Error::InvalidWeight { row: i, col: j });
            }
            weights.extend_from_slice(row);
        }
        Ok(AdjacencyMatrix { n, weights })
    }

    /// Return an error if `u` is not a node of this graph.
    pub fn check_node(&self, u: usize) -> Result<()> {
        if u < self.n {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: u,
                num_nodes: self.n,
            })
        }
    }

    /// Set the weight of the (directed) edge from `u` to `v`.
    ///
    /// A weight of zero removes the edge.
    pub fn set_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight { row: u, col: v });
        }
        self.weights[u * self.n + v] = weight;
        Ok(())
    }

    /// Set the weight of the edges from `u` to `v` and from `v` to `u`.
    pub fn set_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.set_edge(u, v, weight)?;
        self.set_edge(v, u, weight)
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Return the number of (directed) edges, i.e. the number of positive
    /// entries.
    pub fn num_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w > W::zero()).count()
    }

    /// Return the weight stored for the pair `(u, v)`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a node of this graph.
    pub fn weight(&self, u: usize, v: usize) -> W {
        assert!(u < self.n && v < self.n, "Node pair ({}, {}) out of range", u, v);
        self.weights[u * self.n + v]
    }

    /// Return `true` if there is an edge from `u` to `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v) > W::zero()
    }

    /// Return the weights of all edges leaving `u`.
    pub fn row(&self, u: usize) -> &[W] {
        &self.weights[u * self.n..(u + 1) * self.n]
    }

    /// Return an iterator over all rows.
    pub fn rows(&self) -> Chunks<'_, W> {
        // `chunks` panics on zero, the empty graph has no rows anyway
        self.weights.chunks(self.n.max(1))
    }

    /// Return a copy of the weights as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Return `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|u| (u + 1..self.n).all(|v| self.weight(u, v) == self.weight(v, u)))
    }

    /// Return `true` if no node has a loop.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.n).all(|u| self.weight(u, u) == W::zero())
    }

    /// Return `true` if the matrix describes a simple undirected graph.
    pub fn is_undirected(&self) -> bool {
        self.has_zero_diagonal() && self.is_symmetric()
    }

    /// Return the length of a path given by its sequence of nodes.
    ///
    /// Returns `None` if the sequence is empty, contains a node not in the
    /// graph, if some pair of consecutive nodes is not joined by an edge or
    /// if the length overflows `W`.
    pub fn path_cost(&self, path: &[usize]) -> Option<W> {
        if path.is_empty() || path.iter().any(|&u| u >= self.n) {
            return None;
        }
        let mut cost = W::zero();
        for uv in path.windows(2) {
            let w = self.weight(uv[0], uv[1]);
            if w <= W::zero() {
                return None;
            }
            cost = cost.checked_sum(w)?;
        }
        Some(cost)
    }
}

impl<W> TryFrom<Vec<Vec<W>>> for AdjacencyMatrix<W>
where
    W: Weight,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        AdjacencyMatrix::from_rows(&rows)
    }
}

impl<W> From<AdjacencyMatrix<W>> for Vec<Vec<W>>
where
    W: Weight,
{
    fn from(g: AdjacencyMatrix<W>) -> Self {
        g.to_rows()
    }
}

impl<W> fmt::Display for AdjacencyMatrix<W>
where
    W: Weight + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (u, row) in self.rows().enumerate().take(self.n) {
            write!(fmt, "{:>4}:", u)?;
            for w in row {
                write!(fmt, " {:>6}", w)?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serialize")]
mod serialize {
    use super::{AdjacencyMatrix, Weight};
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl<W> Serialize for AdjacencyMatrix<W>
    where
        W: Weight + Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.rows().take(self.num_nodes()))
        }
    }

    impl<'de, W> Deserialize<'de> for AdjacencyMatrix<W>
    where
        W: Weight + Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let rows = Vec::<Vec<W>>::deserialize(deserializer)?;
            AdjacencyMatrix::from_rows(&rows).map_err(de::Error::custom)
        }
    }
}
