// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![allow(clippy::type_complexity)]

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use crate::matrix::{AdjacencyMatrix, Weight};

use std::iter::successors;

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall.
///
/// Returns a 2D vector with entries `(dist, pred)` for each pair of
/// nodes where `dist` is the length of the shortest path and `pred` is
/// the predecessor of the last node. Unreachable pairs are `None`, as are
/// pairs whose distance overflows `W`.
///
/// # Example
/// ```
/// use rs_kpaths::AdjacencyMatrix;
/// use rs_kpaths::shortestpath::floydwarshall;
///
/// let g = AdjacencyMatrix::from_rows(&[
///     [0, 6, 5, 0, 0],
///     [0, 0, 7, 3, 2],
///     [0, 0, 0, 4, 0],
///     [0, 1, 0, 0, 8],
///     [2, 0, 0, 7, 0],
/// ]).unwrap();
///
/// let result = floydwarshall::all_pairs(&g);
/// let mut s = [[0; 5]; 5];
/// for (i, v) in result.iter().enumerate() {
///     for (j, d) in v.iter().enumerate() {
///         s[i][j] = d.unwrap().0;
///     }
/// }
/// assert_eq!(s, [[ 0, 6, 5, 9, 8],
///                [ 4, 0, 7, 3, 2],
///                [ 9, 5, 0, 4, 7],
///                [ 5, 1, 8, 0, 3],
///                [ 2, 8, 7, 7, 0],]);
///
/// assert_eq!(floydwarshall::path(&result, 2, 0), Some(vec![2, 3, 1, 4, 0]));
/// ```
pub fn all_pairs<W>(g: &AdjacencyMatrix<W>) -> Vec<Vec<Option<(W, usize)>>>
where
    W: Weight,
{
    let n = g.num_nodes();
    let mut dist: Vec<Vec<Option<(W, usize)>>> = vec![vec![None; n]; n];

    for u in 0..n {
        dist[u][u] = Some((W::zero(), u));
    }

    for (u, row) in g.rows().enumerate() {
        for (v, &w) in row.iter().enumerate() {
            if u != v && w > W::zero() {
                dist[u][v] = Some((w, u));
            }
        }
    }

    for k in 0..n {
        for u in 0..n {
            if u == k {
                continue;
            }
            if let Some(&(dist_uk, _)) = dist[u][k].as_ref() {
                for v in 0..n {
                    if v == k {
                        continue;
                    }
                    if let Some(&(dist_kv, pred_kv)) = dist[k][v].as_ref() {
                        // an overflowing sum is never an improvement
                        if let Some(d) = dist_uk.checked_sum(dist_kv) {
                            if dist[u][v].map(|x| x.0 > d).unwrap_or(true) {
                                dist[u][v] = Some((d, pred_kv));
                            }
                        }
                    }
                }
            }
        }
    }

    dist
}

/// Extract the nodes of a shortest path from `u` to `v` from the result
/// of [`all_pairs`].
///
/// Returns `None` if there is no path.
pub fn path<W>(dist: &[Vec<Option<(W, usize)>>], u: usize, v: usize) -> Option<Vec<usize>> {
    dist[u][v].as_ref()?;
    let mut path: Vec<_> = successors(Some(v), |&x| {
        if x == u {
            None
        } else {
            dist[u][x].as_ref().map(|&(_, pred)| pred)
        }
    })
    .collect();
    path.reverse();
    Some(path)
}
