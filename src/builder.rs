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

//! Incremental construction of adjacency matrices.

use crate::error::Result;
use crate::matrix::{AdjacencyMatrix, Weight};

/// A builder for [`AdjacencyMatrix`].
///
/// The matrix size is not known in advance, so nodes and edges are collected
/// first and the matrix is only allocated by [`MatrixBuilder::into_matrix`].
/// Adding an edge between the same pair of nodes twice keeps the weight
/// added last, parallel edges cannot be represented.
pub struct MatrixBuilder<W> {
    nnodes: usize,
    edges: Vec<(usize, usize, W)>,
}

impl<W> MatrixBuilder<W>
where
    W: Weight,
{
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacities(0, 0)
    }

    /// Create a new, empty builder.
    ///
    /// `nnodes` is ignored, `nedges` is used to reserve memory for the edge
    /// list.
    pub fn with_capacities(_nnodes: usize, nedges: usize) -> Self {
        MatrixBuilder {
            nnodes: 0,
            edges: Vec::with_capacity(nedges),
        }
    }

    /// Return the current number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// Return the number of directed edges added so far.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add a new node.
    pub fn add_node(&mut self) -> usize {
        self.nnodes += 1;
        self.nnodes - 1
    }

    /// Add `n` new nodes.
    pub fn add_nodes(&mut self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.add_node()).collect()
    }

    /// Add a directed edge from `u` to `v`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        self.edges.push((u, v, weight));
    }

    /// Add an undirected edge, i.e. an edge in both directions.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) {
        self.add_edge(u, v, weight);
        self.add_edge(v, u, weight);
    }

    /// Turn the builder into a matrix.
    ///
    /// Fails if some edge has an end node that has never been added or if
    /// some weight is negative.
    pub fn into_matrix(self) -> Result<AdjacencyMatrix<W>> {
        let mut g = AdjacencyMatrix::new(self.nnodes);
        for (u, v, w) in self.edges {
            g.set_edge(u, v, w)?;
        }
        Ok(g)
    }
}

impl<W> Default for MatrixBuilder<W>
where
    W: Weight,
{
    fn default() -> Self {
        MatrixBuilder::new()
    }
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Create a new graph by passing a builder to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_kpaths::AdjacencyMatrix;
    ///
    /// let g = AdjacencyMatrix::new_with(|b| {
    ///     let u = b.add_node();
    ///     let v = b.add_node();
    ///     b.add_undirected_edge(u, v, 5);
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(g.num_nodes(), 2);
    /// assert_eq!(g.num_edges(), 2);
    /// assert_eq!(g.weight(1, 0), 5);
    /// ```
    pub fn new_with<F>(f: F) -> Result<Self>
    where
        F: FnOnce(&mut MatrixBuilder<W>),
    {
        let mut b = MatrixBuilder::new();
        f(&mut b);
        b.into_matrix()
    }
}
