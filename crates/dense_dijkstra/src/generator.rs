use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::matrix::AdjacencyMatrix;

const C_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MatrixCase {
    DenseRandom,
    SparseRandom,
    DirectedRandom,
    ShuffledLine,
    AllZero,
    UnitWeights,
    Disconnected,
}

impl MatrixCase {
    pub const ALL: [MatrixCase; 7] = [
        Self::DenseRandom,
        Self::SparseRandom,
        Self::DirectedRandom,
        Self::ShuffledLine,
        Self::AllZero,
        Self::UnitWeights,
        Self::Disconnected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DenseRandom => "dense_random",
            Self::SparseRandom => "sparse_random",
            Self::DirectedRandom => "directed_random",
            Self::ShuffledLine => "shuffled_line",
            Self::AllZero => "all_zero",
            Self::UnitWeights => "unit_weights",
            Self::Disconnected => "disconnected",
        }
    }

    /// Whether the generated matrix is always symmetric.
    pub fn is_undirected(self) -> bool {
        !matches!(self, Self::DirectedRandom)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedMatrix {
    pub matrix: AdjacencyMatrix,
    pub source: usize,
    pub target: usize,
}

pub fn generate_case(case: MatrixCase, size: usize, seed: u64) -> GeneratedMatrix {
    let n = size.max(4);
    match case {
        MatrixCase::DenseRandom => dense_case(n, seed, |rng| rng.random_range(0..=C_MAX)),
        MatrixCase::SparseRandom => sparse_random_case(n, seed, 2),
        MatrixCase::DirectedRandom => directed_random_case(n, seed),
        MatrixCase::ShuffledLine => shuffled_line_case(n, seed),
        MatrixCase::AllZero => dense_case(n, seed, |_| 0),
        MatrixCase::UnitWeights => dense_case(n, seed, |_| 1),
        MatrixCase::Disconnected => disconnected_case(n, seed),
    }
}

fn dense_case(n: usize, seed: u64, mut weight: impl FnMut(&mut StdRng) -> u64) -> GeneratedMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            let w = weight(&mut rng);
            matrix.set_undirected_edge(u, v, w);
        }
    }

    let (source, target) = distinct_pair(&mut rng, n);
    GeneratedMatrix {
        matrix,
        source,
        target,
    }
}

fn sparse_random_case(n: usize, seed: u64, edge_factor: usize) -> GeneratedMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::new(n);
    let m_target = n.saturating_mul(edge_factor).min(n * (n - 1) / 2);

    let mut placed = 0;
    while placed < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v || matrix.weight(u, v).is_some() {
            continue;
        }
        matrix.set_undirected_edge(u, v, rng.random_range(0..=C_MAX));
        placed += 1;
    }

    let (source, target) = distinct_pair(&mut rng, n);
    GeneratedMatrix {
        matrix,
        source,
        target,
    }
}

fn directed_random_case(n: usize, seed: u64) -> GeneratedMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::new(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.random_bool(0.3) {
                matrix.set_edge(u, v, rng.random_range(0..=C_MAX));
            }
        }
    }

    let (source, target) = distinct_pair(&mut rng, n);
    GeneratedMatrix {
        matrix,
        source,
        target,
    }
}

fn shuffled_line_case(n: usize, seed: u64) -> GeneratedMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);

    let mut matrix = AdjacencyMatrix::new(n);
    for pair in perm.windows(2) {
        matrix.set_undirected_edge(pair[0], pair[1], rng.random_range(0..=10));
    }
    // Long detours that never beat walking the line.
    for i in 0..n.saturating_sub(3) {
        let j = i + rng.random_range(2..=3).min(n - 1 - i);
        matrix.set_undirected_edge(perm[i], perm[j], C_MAX);
    }

    GeneratedMatrix {
        matrix,
        source: perm[0],
        target: perm[n - 1],
    }
}

fn disconnected_case(n: usize, seed: u64) -> GeneratedMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    let (left, right) = perm.split_at(n / 2);

    let mut matrix = AdjacencyMatrix::new(n);
    for side in [left, right] {
        for (i, &u) in side.iter().enumerate() {
            for &v in &side[i + 1..] {
                if rng.random_bool(0.5) {
                    matrix.set_undirected_edge(u, v, rng.random_range(0..=C_MAX));
                }
            }
        }
    }

    GeneratedMatrix {
        matrix,
        source: left[rng.random_range(0..left.len())],
        target: right[rng.random_range(0..right.len())],
    }
}

fn distinct_pair(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}
