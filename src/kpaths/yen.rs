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

//! Yen's algorithm for the k shortest loopless paths.
//!
//! The search is implemented as an iterator. Each call to `next` confirms
//! one more path, so the iterator can be combined with the usual iterator
//! adaptors.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::classes;
//! use rs_kpaths::kpaths::yen;
//!
//! let g = classes::cycle(6, 1u32).unwrap();
//!
//! // on a cycle there are exactly two paths between any two nodes
//! let paths: Vec<_> = yen::start(&g, 0, 2).collect();
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].path, vec![0, 1, 2]);
//! assert_eq!(paths[1].path, vec![0, 5, 4, 3, 2]);
//!
//! // paths up to a given length
//! assert_eq!(yen::start(&g, 0, 3).take_while(|p| p.cost <= 3).count(), 2);
//! ```

use super::{PathCandidate, ResultSet};
use crate::adjacencies::Adjacencies;
use crate::collections::{ItemSet, NodeSet};
use crate::error::Result;
use crate::matrix::{AdjacencyMatrix, Weight};
use crate::shortestpath::dijkstra;

use std::collections::HashSet;
use std::fmt::Debug;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Iterator over the shortest loopless paths between two nodes.
///
/// The paths are returned in order of non-decreasing cost. Paths of equal
/// cost are returned in the order in which they have been discovered.
pub struct Yen<'a, W> {
    graph: &'a AdjacencyMatrix<W>,
    src: usize,
    snk: usize,
    /// The confirmed paths.
    found: Vec<PathCandidate<W>>,
    /// The candidate paths, in insertion order.
    candidates: Vec<PathCandidate<W>>,
    /// Node sequences of all confirmed and candidate paths.
    seen: HashSet<Vec<usize>>,
    finished: bool,
}

/// Start the enumeration of the paths from `src` to `snk`.
///
/// # Panics
///
/// Panics if `src` or `snk` is not a node of `graph`. Use
/// [`k_shortest_paths`] for a checked version.
pub fn start<W>(graph: &AdjacencyMatrix<W>, src: usize, snk: usize) -> Yen<'_, W>
where
    W: Weight + Debug,
{
    assert!(src < graph.num_nodes(), "Source node {} out of range", src);
    assert!(snk < graph.num_nodes(), "Target node {} out of range", snk);
    Yen {
        graph,
        src,
        snk,
        found: vec![],
        candidates: vec![],
        seen: HashSet::new(),
        finished: false,
    }
}

/// Compute the `k` shortest loopless paths from `src` to `snk`.
///
/// Returns fewer than `k` paths if there are not enough of them, in
/// particular an empty result if `snk` is not reachable. If `src == snk`
/// the only path is the trivial path `[src]` of cost zero.
///
/// Fails if `src` or `snk` is not a node of `graph`.
pub fn k_shortest_paths<W>(graph: &AdjacencyMatrix<W>, src: usize, snk: usize, k: usize) -> Result<ResultSet<W>>
where
    W: Weight + Debug,
{
    graph.check_node(src)?;
    graph.check_node(snk)?;
    Ok(start(graph, src, snk).take(k).collect())
}

impl<'a, W> Yen<'a, W>
where
    W: Weight + Debug,
{
    /// Return the paths confirmed so far.
    pub fn paths(&self) -> &[PathCandidate<W>] {
        &self.found
    }

    /// Return the paths confirmed so far.
    pub fn into_paths(self) -> ResultSet<W> {
        self.found
    }

    fn first_path(&mut self) -> Option<PathCandidate<W>> {
        let tree = dijkstra::run(self.graph, self.src);
        let path = tree.path_to(self.snk)?;
        let cost = tree.distance(self.snk)?;
        self.seen.insert(path.clone());
        Some(PathCandidate { cost, path })
    }

    /// Add all deviations of the last confirmed path to the candidates.
    fn add_spur_paths(&mut self) {
        let graph = self.graph;
        let last = match self.found.last() {
            Some(last) => &last.path,
            None => return,
        };

        for j in 0..last.len() - 1 {
            let spur = last[j];
            let root = &last[..=j];

            // edges leaving the spur node on confirmed paths with the same root
            let removed_edges: HashSet<(usize, usize)> = self
                .found
                .iter()
                .map(|c| &c.path)
                .filter(|p| p.len() > j + 1 && p[..=j] == *root)
                .map(|p| (p[j], p[j + 1]))
                .collect();
            let mut removed_nodes = NodeSet::with_num_nodes(graph.num_nodes());
            for &u in &root[..j] {
                removed_nodes.insert(u);
            }

            let masked = graph.filter(|u, v| {
                !removed_nodes.contains(u) && !removed_nodes.contains(v) && !removed_edges.contains(&(u, v))
            });
            trace!(spur, removed_edges = removed_edges.len(), "spur search");
            let spur_path = match dijkstra::run(&masked, spur).path_to(self.snk) {
                Some(p) => p,
                None => continue,
            };

            let mut path = root[..j].to_vec();
            path.extend(spur_path);
            let cost = match graph.path_cost(&path) {
                Some(cost) => cost,
                None => {
                    debug!(?path, "dropping candidate without valid cost");
                    continue;
                }
            };
            if self.seen.insert(path.clone()) {
                trace!(?path, ?cost, "new candidate");
                self.candidates.push(PathCandidate { cost, path });
            }
        }
    }

    /// Remove the first candidate of minimal cost.
    fn pop_candidate(&mut self) -> Option<PathCandidate<W>> {
        let mut best: Option<usize> = None;
        for (i, c) in self.candidates.iter().enumerate() {
            if best.map(|b| c.cost < self.candidates[b].cost).unwrap_or(true) {
                best = Some(i);
            }
        }
        best.map(|i| self.candidates.remove(i))
    }
}

impl<'a, W> Iterator for Yen<'a, W>
where
    W: Weight + Debug,
{
    type Item = PathCandidate<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = if self.found.is_empty() {
            self.first_path()
        } else {
            self.add_spur_paths();
            self.pop_candidate()
        };

        match next {
            Some(p) => {
                debug!(rank = self.found.len() + 1, cost = ?p.cost, "confirmed path");
                self.found.push(p.clone());
                Some(p)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl<'a, W> FusedIterator for Yen<'a, W> where W: Weight + Debug {}
