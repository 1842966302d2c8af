use std::hint::black_box;

use bench::apply_runtime_for_vertices;
use bench::default_rng;
use bench::query_pairs;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use dense_dijkstra::generator::MatrixCase;
use dense_dijkstra::generator::generate_case;
use dense_dijkstra::shortest_path;

const SIZES: [usize; 3] = [16, 128, 512];
const QUERIES: usize = 8;

fn bench_dense_dijkstra(c: &mut Criterion) {
    let mut rng = default_rng();

    for case in MatrixCase::ALL {
        let mut group = c.benchmark_group(format!("dense_dijkstra/{}", case.label()));

        for &size in &SIZES {
            apply_runtime_for_vertices(&mut group, size);
            let seed = 0x5EED_2026 ^ ((size as u64) << 7) ^ (case as u64);
            let input = generate_case(case, size, seed);
            let n = input.matrix.vertex_count();

            group.bench_function(BenchmarkId::new("generated_pair", size), |bencher| {
                bencher.iter(|| {
                    let r = shortest_path(&input.matrix, input.source, input.target);
                    black_box(r);
                });
            });

            let pairs = query_pairs(&mut rng, n, QUERIES);
            group.bench_function(BenchmarkId::new("random_pairs", size), |bencher| {
                bencher.iter(|| {
                    for &(s, t) in &pairs {
                        black_box(shortest_path(&input.matrix, s, t));
                    }
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_dense_dijkstra);
criterion_main!(benches);
