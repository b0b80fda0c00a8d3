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

use rs_kpaths::shortestpath::{dijkstra, floydwarshall};
use rs_kpaths::{k_path_matrix, k_shortest_paths, shortest_paths_from, AdjacencyMatrix, Error as GraphError};

use ordered_float::NotNan;
use std::convert::TryFrom;
use std::error::Error;

fn practice() -> Result<AdjacencyMatrix<u32>, GraphError> {
    AdjacencyMatrix::from_rows(&[
        [0, 4, 2, 0, 0],
        [4, 0, 1, 5, 0],
        [2, 1, 0, 8, 10],
        [0, 5, 8, 0, 2],
        [0, 0, 10, 2, 0],
    ])
}

fn small() -> Result<AdjacencyMatrix<u32>, GraphError> {
    AdjacencyMatrix::from_rows(&[[0, 1, 4, 0], [1, 0, 2, 5], [4, 2, 0, 1], [0, 5, 1, 0]])
}

fn partial() -> Result<AdjacencyMatrix<u32>, GraphError> {
    AdjacencyMatrix::from_rows(&[
        [0, 3, 0, 0, 0],
        [3, 0, 2, 0, 0],
        [0, 2, 0, 4, 1],
        [0, 0, 4, 0, 5],
        [0, 0, 1, 5, 0],
    ])
}

fn large() -> Result<AdjacencyMatrix<u32>, GraphError> {
    AdjacencyMatrix::from_rows(&[
        [0, 7, 9, 0, 0, 14],
        [7, 0, 10, 15, 0, 0],
        [9, 10, 0, 11, 0, 2],
        [0, 15, 11, 0, 6, 0],
        [0, 0, 0, 6, 0, 9],
        [14, 0, 2, 0, 9, 0],
    ])
}

fn comparison() -> Result<AdjacencyMatrix<u32>, GraphError> {
    AdjacencyMatrix::from_rows(&[
        [0, 2, 4, 0, 0, 0],
        [2, 0, 1, 4, 0, 0],
        [4, 1, 0, 1, 5, 0],
        [0, 4, 1, 0, 1, 3],
        [0, 0, 5, 1, 0, 2],
        [0, 0, 0, 3, 2, 0],
    ])
}

fn all_graphs() -> Result<Vec<AdjacencyMatrix<u32>>, GraphError> {
    Ok(vec![practice()?, small()?, partial()?, large()?, comparison()?])
}

#[test]
fn test_practice_paths() -> Result<(), Box<dyn Error>> {
    let g = practice()?;
    let paths = k_shortest_paths(&g, 0, 4, 3)?;
    assert_eq!(paths.iter().map(|p| p.cost).collect::<Vec<_>>(), vec![10, 11, 12]);
    assert_eq!(paths[0].path, vec![0, 2, 1, 3, 4]);
    assert_eq!(paths[1].path, vec![0, 1, 3, 4]);
    assert_eq!(paths[2].path, vec![0, 2, 4]);
    Ok(())
}

#[test]
fn test_equal_costs() -> Result<(), Box<dyn Error>> {
    let g = comparison()?;
    let paths = k_shortest_paths(&g, 0, 5, 3)?;
    assert_eq!(paths.iter().map(|p| p.cost).collect::<Vec<_>>(), vec![7, 7, 8]);
    assert_eq!(paths[0].path, vec![0, 1, 2, 3, 5]);
    assert_eq!(paths[1].path, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(paths[2].path, vec![0, 2, 3, 5]);
    Ok(())
}

#[test]
fn test_disconnected() -> Result<(), Box<dyn Error>> {
    let g = AdjacencyMatrix::<u32>::new(4);
    for k in 1..4 {
        assert!(k_shortest_paths(&g, 0, 3, k)?.is_empty());
        assert_eq!(k_path_matrix(&g, k).to_rows(), vec![vec![None; 4]; 4]);
    }
    Ok(())
}

#[test]
fn test_two_nodes() -> Result<(), Box<dyn Error>> {
    let g = AdjacencyMatrix::from_rows(&[[0, 5], [5, 0]])?;
    let paths = k_shortest_paths(&g, 0, 1, 2)?;
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].cost, 5);
    assert_eq!(paths[0].path, vec![0, 1]);

    let m = k_path_matrix(&g, 2);
    assert_eq!(m.to_rows_with(u32::MAX), vec![vec![u32::MAX, 5], vec![5, u32::MAX]]);
    Ok(())
}

#[test]
fn test_isolated_target() -> Result<(), Box<dyn Error>> {
    let mut rows = practice()?.to_rows();
    for row in rows.iter_mut() {
        row.push(0);
    }
    rows.push(vec![0; 6]);
    let g = AdjacencyMatrix::try_from(rows)?;

    assert!(k_shortest_paths(&g, 0, 5, 3)?.is_empty());
    assert!(k_shortest_paths(&g, 5, 0, 3)?.is_empty());
    assert_eq!(k_shortest_paths(&g, 0, 4, 3)?.len(), 3);
    Ok(())
}

#[test]
fn test_first_path_is_shortest() -> Result<(), Box<dyn Error>> {
    for g in all_graphs()? {
        let n = g.num_nodes();
        for u in 0..n {
            let tree = shortest_paths_from(&g, u)?;
            for v in 0..n {
                let paths = k_shortest_paths(&g, u, v, 1)?;
                match tree.path_to(v) {
                    Some(path) => {
                        assert_eq!(paths.len(), 1);
                        assert_eq!(paths[0].path, path);
                        assert_eq!(Some(paths[0].cost), tree.distance(v));
                    }
                    None => assert!(paths.is_empty()),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_dijkstra_distances() -> Result<(), Box<dyn Error>> {
    let tree = shortest_paths_from(&large()?, 0)?;
    assert_eq!(tree.distances(), &[Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]);
    assert_eq!(tree.path_to(4), Some(vec![0, 2, 5, 4]));
    assert_eq!(dijkstra::find_path(&large()?, 0, 3)?, Some((vec![0, 2, 3], 20)));
    Ok(())
}

#[test]
fn test_matrix_k1() -> Result<(), Box<dyn Error>> {
    for g in all_graphs()? {
        let n = g.num_nodes();
        let m = k_path_matrix(&g, 1);
        let dist = floydwarshall::all_pairs(&g);
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { None } else { dist[i][j].map(|x| x.0) };
                assert_eq!(m.get(i, j), expected, "entry ({}, {})", i, j);
            }
        }
    }
    Ok(())
}

#[test]
fn test_matrix_symmetric() -> Result<(), Box<dyn Error>> {
    for g in all_graphs()? {
        assert!(g.is_undirected());
        let n = g.num_nodes();
        for k in 1..=3 {
            let m = k_path_matrix(&g, k);
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(m.get(i, j), m.get(j, i));
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_matrix_monotone() -> Result<(), Box<dyn Error>> {
    let g = practice()?;
    let ms: Vec<_> = (1..=4).map(|k| k_path_matrix(&g, k)).collect();
    for w in ms.windows(2) {
        for i in 0..5 {
            for j in 0..5 {
                assert!(w[0].get(i, j) <= w[1].get(i, j));
            }
        }
    }
    assert_eq!(ms[2].get(0, 4), Some(12));
    assert_eq!(ms[3].get(0, 4), Some(12));
    Ok(())
}

#[test]
fn test_deterministic() -> Result<(), Box<dyn Error>> {
    for g in all_graphs()? {
        let n = g.num_nodes();
        assert_eq!(k_shortest_paths(&g, 0, n - 1, 5)?, k_shortest_paths(&g, 0, n - 1, 5)?);
        assert_eq!(k_path_matrix(&g, 3), k_path_matrix(&g, 3));
    }
    Ok(())
}

#[test]
fn test_float_weights() -> Result<(), Box<dyn Error>> {
    let w = |x: f64| NotNan::new(x);
    let g = AdjacencyMatrix::from_rows(&[
        [w(0.0)?, w(0.5)?, w(2.0)?],
        [w(0.5)?, w(0.0)?, w(1.25)?],
        [w(2.0)?, w(1.25)?, w(0.0)?],
    ])?;
    let paths = k_shortest_paths(&g, 0, 2, 2)?;
    assert_eq!(paths[0].cost, w(1.75)?);
    assert_eq!(paths[0].path, vec![0, 1, 2]);
    assert_eq!(paths[1].cost, w(2.0)?);
    assert_eq!(paths[1].path, vec![0, 2]);
    Ok(())
}

#[test]
fn test_invalid_input() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        AdjacencyMatrix::try_from(vec![vec![0, 1], vec![1]]).unwrap_err(),
        GraphError::NotSquare {
            row: 1,
            len: 1,
            expected: 2
        }
    );
    assert_eq!(
        AdjacencyMatrix::from_rows(&[[0.0, f64::NAN], [1.0, 0.0]]).unwrap_err(),
        GraphError::InvalidWeight { row: 0, col: 1 }
    );

    let g = practice()?;
    assert_eq!(
        k_shortest_paths(&g, 0, 5, 1).unwrap_err(),
        GraphError::NodeOutOfRange { node: 5, num_nodes: 5 }
    );
    assert!(shortest_paths_from(&g, 17).is_err());
    Ok(())
}

#[cfg(feature = "serialize")]
#[test]
fn test_serde_results() -> Result<(), Box<dyn Error>> {
    let g = practice()?;
    let json = serde_json::to_string(&g)?;
    let h: AdjacencyMatrix<u32> = serde_json::from_str(&json)?;
    assert_eq!(g, h);

    let paths = k_shortest_paths(&h, 0, 4, 2)?;
    let json = serde_json::to_string(&paths)?;
    assert_eq!(json, r#"[{"cost":10,"path":[0,2,1,3,4]},{"cost":11,"path":[0,1,3,4]}]"#);
    Ok(())
}
