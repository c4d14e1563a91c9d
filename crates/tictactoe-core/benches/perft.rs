use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tictactoe_core::perft::perft_root;

const BENCH_DEPTHS: [u32; 2] = [5, 9];
const REFERENCE_COUNTS: &[(u32, u64)] = &[
    (1, 9),
    (2, 72),
    (3, 504),
    (4, 3_024),
    (5, 15_120),
    (6, 54_720),
    (7, 148_176),
    (8, 200_448),
    (9, 127_872),
];

fn expected_nodes(depth: u32) -> Option<u64> {
    REFERENCE_COUNTS
        .iter()
        .find_map(|&(d, nodes)| (d == depth).then_some(nodes))
}

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_root");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for &depth in &BENCH_DEPTHS {
        let expected = expected_nodes(depth).unwrap_or_else(|| {
            panic!("perft depth {depth} has no entry in REFERENCE_COUNTS");
        });

        assert_eq!(
            perft_root(depth),
            expected,
            "reference node count mismatch at depth {depth}"
        );

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let nodes = perft_root(black_box(depth));
                black_box(nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
