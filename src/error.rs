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

//! Errors raised at the boundary of the path algorithms.

use thiserror::Error;

/// Invalid input to one of the graph operations.
///
/// Unreachable targets or too few paths are *not* errors, they produce
/// empty or short results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The adjacency matrix is not square.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    /// A weight is negative or not a number.
    #[error("invalid weight at ({row}, {col}): weights must be non-negative")]
    InvalidWeight { row: usize, col: usize },
    /// A node index does not belong to the graph.
    #[error("node {node} out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
