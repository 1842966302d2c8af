use log::debug;
use log::trace;

use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use crate::path::Cost;
use crate::path::PathResult;

/// Single-pair Dijkstra over a dense adjacency matrix, `O(V^2)`.
///
/// Stops as soon as `dest` is finalized, or when no unvisited vertex has a
/// finite distance. Among equally short candidates the lowest index is
/// finalized first, and a relaxation only replaces a predecessor on a strict
/// improvement, so the reported path is deterministic.
///
/// Weights must be non-negative; `u64` guarantees that. Distances are kept
/// as `u128`, which holds any simple path of `u64` edges without overflow.
///
/// # Panics
///
/// If `start` or `dest` is not a vertex of `graph`. Use
/// [`try_shortest_path`] to get an error instead.
pub fn shortest_path(graph: &AdjacencyMatrix, start: usize, dest: usize) -> PathResult {
    let n = graph.vertex_count();
    assert!(start < n, "start vertex {start} out of range (vertex count {n})");
    assert!(dest < n, "dest vertex {dest} out of range (vertex count {n})");

    debug!("shortest path query {start} -> {dest} on {n} vertices");

    let mut dist: Vec<Option<u128>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    dist[start] = Some(0);
    visited[start] = true;
    let mut u = start;

    while u != dest {
        let Some(du) = dist[u] else {
            break;
        };

        for (v, cell) in graph.row(u).iter().enumerate() {
            if visited[v] {
                continue;
            }
            let Some(w) = *cell else {
                continue;
            };
            let cand = du + u128::from(w);
            if dist[v].is_none_or(|dv| cand < dv) {
                dist[v] = Some(cand);
                prev[v] = Some(u);
            }
        }

        let Some(next) = closest_unvisited(&dist, &visited) else {
            debug!("no reachable vertex left after settling {u}");
            break;
        };
        trace!("settle {next} at distance {:?} via {:?}", dist[next], prev[next]);
        visited[next] = true;
        u = next;
    }

    let result = match dist[dest] {
        Some(cost) => PathResult {
            cost: Cost::Finite(cost),
            path: walk_back(&prev, dest),
        },
        None => PathResult::unreachable(),
    };
    debug!("shortest path {start} -> {dest}: cost {}, {} hops", result.cost, result.hops());
    result
}

/// Same as [`shortest_path`], but reports bad indices as an error.
pub fn try_shortest_path(graph: &AdjacencyMatrix, start: usize, dest: usize) -> Result<PathResult> {
    graph.check_vertex(start)?;
    graph.check_vertex(dest)?;
    Ok(shortest_path(graph, start, dest))
}

/// Left-to-right scan with strict `<`, so ties go to the lowest index.
fn closest_unvisited(dist: &[Option<u128>], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(u128, usize)> = None;
    for (v, (&d, &done)) in dist.iter().zip(visited).enumerate() {
        if done {
            continue;
        }
        let Some(d) = d else {
            continue;
        };
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, v));
        }
    }
    best.map(|(_, v)| v)
}

fn walk_back(prev: &[Option<usize>], dest: usize) -> Vec<usize> {
    let mut path = vec![dest];
    let mut cur = dest;
    while let Some(p) = prev[cur] {
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}
