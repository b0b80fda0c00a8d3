/*
 * Copyright (c) 2018, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

/// A (finite) set of items (nodes or edges) of a graph.
pub trait ItemSet<I>
where
    I: Copy,
{
    /// Return `true` if this set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of items in this set.
    fn len(&self) -> usize;

    /// Add one item to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    fn insert(&mut self, u: I) -> bool;

    /// Return `true` iff item `u` is contained in this set.
    fn contains(&self, u: I) -> bool;
}

const BITS: usize = u64::BITS as usize;

/// A set of node indices stored as a bitset.
///
/// The set grows as needed, so nodes may be inserted without knowing the
/// size of the graph in advance.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    words: Vec<u64>,
    len: usize,
}

impl NodeSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty set with room for the nodes `0..n`.
    pub fn with_num_nodes(n: usize) -> Self {
        NodeSet {
            words: vec![0; (n + BITS - 1) / BITS],
            len: 0,
        }
    }
}

impl ItemSet<usize> for NodeSet {
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, u: usize) -> bool {
        let (i, mask) = (u / BITS, 1u64 << (u % BITS));
        if i >= self.words.len() {
            self.words.resize(i + 1, 0);
        }
        if self.words[i] & mask != 0 {
            return false;
        }
        self.words[i] |= mask;
        self.len += 1;
        true
    }

    fn contains(&self, u: usize) -> bool {
        self.words
            .get(u / BITS)
            .map(|w| w & (1u64 << (u % BITS)) != 0)
            .unwrap_or(false)
    }
}
