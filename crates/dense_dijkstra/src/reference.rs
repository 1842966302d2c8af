use crate::matrix::AdjacencyMatrix;

/// All-pairs distances by Floyd-Warshall, `None` when unreachable.
pub(crate) fn floyd_warshall(graph: &AdjacencyMatrix) -> Vec<Vec<Option<u128>>> {
    let n = graph.vertex_count();
    let mut d: Vec<Vec<Option<u128>>> = (0..n)
        .map(|v| graph.row(v).iter().map(|w| w.map(u128::from)).collect())
        .collect();
    for (v, row) in d.iter_mut().enumerate() {
        row[v] = Some(0);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = d[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = d[k][j] else {
                    continue;
                };
                let cand = ik + kj;
                if d[i][j].is_none_or(|ij| cand < ij) {
                    d[i][j] = Some(cand);
                }
            }
        }
    }
    d
}
