/*
 * Copyright (c) 2017, 2018, 2021, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in (directed or undirected) graph. Each edge is
//! assigned a non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The implementation does not use a `decrease_key` operation. Whenever the
//! distance of a node improves, the node is pushed onto the heap again. When
//! a node is popped that has already been finished, the entry is outdated
//! and skipped. With a binary heap the running time is $O((n + m) \log n)$.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::AdjacencyMatrix;
//! use rs_kpaths::shortestpath::dijkstra;
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 9, 2, 0, 14, 0],
//!     [9, 0, 0, 6, 0, 0],
//!     [2, 0, 0, 8, 9, 10],
//!     [0, 6, 8, 0, 0, 15],
//!     [14, 0, 9, 0, 0, 7],
//!     [0, 0, 10, 15, 7, 0],
//! ]).unwrap();
//!
//! let tree = dijkstra::shortest_paths_from(&g, 4).unwrap();
//!
//! assert_eq!(tree.distances(), &[Some(11), Some(20), Some(9), Some(17), Some(0), Some(7)]);
//! assert_eq!(tree.predecessor(4), None);
//! assert_eq!(tree.path_to(1), Some(vec![4, 2, 0, 1]));
//!
//! let (path, dist) = dijkstra::find_path(&g, 4, 1).unwrap().unwrap();
//! assert_eq!(dist, 20);
//! assert_eq!(path, vec![4, 2, 0, 1]);
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::{BinHeap, ItemPriQueue, ItemSet, NodeSet};
use crate::error::Result;
use crate::matrix::{AdjacencyMatrix, Weight};
use crate::num::traits::Zero;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::iter::successors;
use tracing::trace;

/// The result of a single-source shortest path computation.
///
/// For each node the tree stores the length of a shortest path from the
/// source (`None` if the node cannot be reached) and the preceding node on
/// that path (`None` for the source and for unreachable nodes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPathTree<W> {
    source: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPathTree<W>
where
    W: Copy,
{
    /// Return the start node of the search.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Return the distance of `v` from the source.
    pub fn distance(&self, v: usize) -> Option<W> {
        self.dist[v]
    }

    /// Return the node preceding `v` on a shortest path.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// Return `true` if there is a path from the source to `v`.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.dist[v].is_some()
    }

    /// Return the distances of all nodes.
    pub fn distances(&self) -> &[Option<W>] {
        &self.dist
    }

    /// Return the predecessors of all nodes.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Return the distances and predecessors of all nodes.
    pub fn into_parts(self) -> (Vec<Option<W>>, Vec<Option<usize>>) {
        (self.dist, self.pred)
    }

    /// Return the nodes on a shortest path from the source to `target`.
    ///
    /// The path starts at the source and ends at `target`. Returns `None` if
    /// `target` is not reachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.dist[target]?;
        let mut path: Vec<_> = successors(Some(target), |&u| self.pred[u]).collect();
        path.reverse();
        Some(path)
    }
}

/// Run Dijkstra's algorithm from `src` on the given adjacencies.
///
/// Only edges with a positive weight are traversed. A node whose distance
/// overflows the weight type is treated as unreachable along that path.
///
/// # Panics
///
/// Panics if `src` is not a node of `adj`.
pub fn run<A>(adj: A, src: usize) -> ShortestPathTree<A::Weight>
where
    A: Adjacencies,
    A::Weight: Weight,
{
    let n = adj.num_nodes();
    assert!(src < n, "Source node {} out of range", src);

    let mut dist = vec![None; n];
    let mut pred = vec![None; n];
    let mut finished = NodeSet::with_num_nodes(n);
    let mut heap = BinHeap::with_capacity(n);

    dist[src] = Some(A::Weight::zero());
    heap.push(src, A::Weight::zero());

    while let Some((u, d)) = heap.pop_min() {
        if !finished.insert(u) {
            // outdated entry
            continue;
        }
        for (v, w) in adj.neighs(u) {
            if finished.contains(v) || !(w > A::Weight::zero()) {
                continue;
            }
            let newdist = match d.checked_sum(w) {
                Some(newdist) => newdist,
                // not representable, hence no improvement
                None => continue,
            };
            if dist[v].map(|olddist| newdist < olddist).unwrap_or(true) {
                dist[v] = Some(newdist);
                pred[v] = Some(u);
                heap.push(v, newdist);
            }
        }
    }

    trace!(source = src, reached = finished.len(), "dijkstra finished");

    ShortestPathTree { source: src, dist, pred }
}

/// Compute shortest paths from `source` to all nodes of `g`.
///
/// Fails if `source` is not a node of `g`.
pub fn shortest_paths_from<W>(g: &AdjacencyMatrix<W>, source: usize) -> Result<ShortestPathTree<W>>
where
    W: Weight,
{
    g.check_node(source)?;
    Ok(run(g, source))
}

/// Compute a shortest path from `src` to `snk`.
///
/// Returns the nodes on the path and its length, or `None` if `snk` cannot
/// be reached from `src`.
pub fn find_path<W>(g: &AdjacencyMatrix<W>, src: usize, snk: usize) -> Result<Option<(Vec<usize>, W)>>
where
    W: Weight,
{
    g.check_node(snk)?;
    let tree = shortest_paths_from(g, src)?;
    Ok(tree.path_to(snk).zip(tree.distance(snk)))
}
