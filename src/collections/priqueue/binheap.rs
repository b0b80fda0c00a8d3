// Copyright (c) 2016, 2017, 2020, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

use crate::collections::ItemPriQueue;

/// Simple binary min-heap of `(key, value)` pairs ordered by value.
///
/// In contrast to `std::collections::BinaryHeap` the values only need to be
/// `PartialOrd`, so floating point distances can be used directly.
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<(K, V)>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(n),
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    V: PartialOrd,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Move the element at `cur_pos` up in the heap until its parent does not
    /// have a larger value or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            // We could have used >=, too, but using >
            // moves the item up the heap as far as possible. This results the
            // last node touched with the same value to be considered next (to a
            // certain extend) making the search more dfs like.
            if self.heap[cur_pos].1 > self.heap[parent_pos].1 {
                break;
            }
            self.heap.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }

    /// Move the element at `cur_pos` down in the heap until none of its
    /// children has a smaller value.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.heap[left_pos].1 < self.heap[right_pos].1 {
                left_pos
            } else {
                right_pos
            };

            if self.heap[cur_pos].1 <= self.heap[next_pos].1 {
                break;
            }

            self.heap.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }
    }
}
