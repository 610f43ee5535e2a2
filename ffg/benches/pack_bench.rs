use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ffg::config::{FFGConfig, SplitRule};
use ffg::pack;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use vtl_core::entities::{CargoBox, Truck};
use vtl_core::geometry::primitives::Dims3;

criterion_main!(benches);
criterion_group!(benches, pack_bench, merge_bench);

const N_BOXES: [usize; 4] = [10, 50, 200, 1000];

fn random_instance(n_boxes: usize, seed: u64) -> (Truck, Vec<CargoBox>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let truck = Truck::new("bench", Dims3::new(240.0, 260.0, 1200.0), None);
    let boxes = (0..n_boxes)
        .map(|i| {
            let dims = Dims3::new(
                rng.random_range(10.0..120.0),
                rng.random_range(10.0..120.0),
                rng.random_range(10.0..120.0),
            );
            CargoBox::new(format!("box_{i}"), dims, rng.random_range(1.0..50.0))
        })
        .collect();
    (truck, boxes)
}

/// Full packing runs for increasing numbers of boxes, for both split rules
fn pack_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for n_boxes in N_BOXES {
        let (truck, boxes) = random_instance(n_boxes, 0);
        for split_rule in [SplitRule::LargerLeftover, SplitRule::SmallerLeftover] {
            let config = FFGConfig {
                split_rule,
                ..FFGConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(split_rule.to_string(), n_boxes),
                &n_boxes,
                |b, _| b.iter(|| pack(black_box(&truck), black_box(&boxes), &config)),
            );
        }
    }
    group.finish();
}

/// Cost of merging the free rectangles after every placement
fn merge_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_free_rects");
    let (truck, boxes) = random_instance(200, 1);
    for merge_free_rects in [true, false] {
        let config = FFGConfig {
            merge_free_rects,
            ..FFGConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(merge_free_rects), |b| {
            b.iter(|| pack(black_box(&truck), black_box(&boxes), &config))
        });
    }
    group.finish();
}
