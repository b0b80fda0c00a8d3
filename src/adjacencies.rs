/*
 * Copyright (c) 2018, 2021, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Abstraction of neighboring nodes.
//!
//! The search algorithms only need to know, for each node, the list of
//! adjacent nodes together with the weights of the connecting edges. The
//! trait [`Adjacencies`] abstracts over this concept. It is implemented by
//! references to an [`AdjacencyMatrix`] (all positive entries of a row) and
//! by [`FilterAdjacencies`], a view that hides some of the edges of another
//! adjacency structure without copying it.
//!
//! # Example
//!
//! ```
//! use rs_kpaths::AdjacencyMatrix;
//! use rs_kpaths::adjacencies::Adjacencies;
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     [0, 1, 1, 0],
//!     [1, 0, 1, 1],
//!     [1, 1, 0, 1],
//!     [0, 1, 1, 0],
//! ]).unwrap();
//!
//! // hide node 2 and the edge 1 -> 3
//! let h = (&g).filter(|u, v| u != 2 && v != 2 && (u, v) != (1, 3));
//!
//! assert_eq!((&g).neighs(1).map(|(v, _)| v).collect::<Vec<_>>(), vec![0, 2, 3]);
//! assert_eq!((&h).neighs(1).map(|(v, _)| v).collect::<Vec<_>>(), vec![0]);
//! assert_eq!((&h).neighs(3).map(|(v, _)| v).collect::<Vec<_>>(), vec![1]);
//! ```

use crate::matrix::{AdjacencyMatrix, Weight};

use std::iter::Enumerate;
use std::slice::Iter;

/// Access to the outgoing edges of each node.
///
/// Nodes are the indices `0..num_nodes()`.
pub trait Adjacencies {
    /// The type of edge weights.
    type Weight;

    /// Iterator over `(neighbor, weight)` pairs.
    type NeighIt: Iterator<Item = (usize, Self::Weight)>;

    /// Return the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Return an iterator over the outgoing edges of `u`.
    fn neighs(&self, u: usize) -> Self::NeighIt;

    /// Return a view that only keeps the edges `(u, v)` for which
    /// `predicate(u, v)` is `true`.
    fn filter<P>(self, predicate: P) -> FilterAdjacencies<Self, P>
    where
        Self: Sized,
        P: Fn(usize, usize) -> bool,
    {
        FilterAdjacencies(self, predicate)
    }
}

/// Iterator over the positive entries of one row of a matrix.
#[derive(Clone)]
pub struct Neighs<'g, W> {
    it: Enumerate<Iter<'g, W>>,
}

impl<'g, W> Iterator for Neighs<'g, W>
where
    W: Weight,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().map(|(v, &w)| (v, w)).find(|&(_, w)| w > W::zero())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.it.size_hint().1)
    }
}

impl<'g, W> Adjacencies for &'g AdjacencyMatrix<W>
where
    W: Weight,
{
    type Weight = W;

    type NeighIt = Neighs<'g, W>;

    fn num_nodes(&self) -> usize {
        AdjacencyMatrix::num_nodes(*self)
    }

    fn neighs(&self, u: usize) -> Self::NeighIt {
        let g: &'g AdjacencyMatrix<W> = *self;
        Neighs {
            it: g.row(u).iter().enumerate(),
        }
    }
}

/// Adjacencies with some edges suppressed.
///
/// Created by [`Adjacencies::filter`]. The underlying structure is only
/// borrowed, removing nodes or edges is done by the predicate. A node is
/// removed by rejecting all of its edges.
pub struct FilterAdjacencies<A, P>(A, P);

/// Iterator over the edges of a [`FilterAdjacencies`].
pub struct Filtered<'f, I, P> {
    it: I,
    u: usize,
    predicate: &'f P,
}

impl<'f, I, P, W> Iterator for Filtered<'f, I, P>
where
    I: Iterator<Item = (usize, W)>,
    P: Fn(usize, usize) -> bool,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        let (u, predicate) = (self.u, self.predicate);
        self.it.by_ref().find(|&(v, _)| predicate(u, v))
    }
}

impl<'f, A, P> Adjacencies for &'f FilterAdjacencies<A, P>
where
    A: Adjacencies,
    P: Fn(usize, usize) -> bool,
{
    type Weight = A::Weight;

    type NeighIt = Filtered<'f, A::NeighIt, P>;

    fn num_nodes(&self) -> usize {
        self.0.num_nodes()
    }

    fn neighs(&self, u: usize) -> Self::NeighIt {
        let adj: &'f FilterAdjacencies<A, P> = *self;
        Filtered {
            it: adj.0.neighs(u),
            u,
            predicate: &adj.1,
        }
    }
}
