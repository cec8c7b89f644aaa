use criterion::{Criterion, criterion_group, criterion_main};
use pcb_seg::geometry::primitives::{Point, Seg};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, nearest_point_bench, intersect_bench, collide_bench);

const N_SEGS: usize = 1000;
const RANGE: i32 = 1_000_000;

fn random_segs(seed: u64) -> Vec<Seg<'static>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..N_SEGS)
        .map(|_| {
            Seg::from_coords(
                rng.random_range(-RANGE..RANGE),
                rng.random_range(-RANGE..RANGE),
                rng.random_range(-RANGE..RANGE),
                rng.random_range(-RANGE..RANGE),
            )
        })
        .collect()
}

fn nearest_point_bench(c: &mut Criterion) {
    let segs = random_segs(0);
    let p = Point::new(12_345, -67_890);
    c.bench_function("nearest_point_1k", |b| {
        b.iter(|| {
            for s in &segs {
                black_box(s.nearest_point(black_box(p)));
            }
        })
    });
}

fn intersect_bench(c: &mut Criterion) {
    let (segs_1, segs_2) = (random_segs(1), random_segs(2));
    c.bench_function("intersect_1k", |b| {
        b.iter(|| {
            for (s1, s2) in segs_1.iter().zip(&segs_2) {
                black_box(s1.intersect(s2, false, false));
            }
        })
    });
}

/// Mostly rejected through the bounding boxes, as in a dense routing layout
fn collide_bench(c: &mut Criterion) {
    let (segs_1, segs_2) = (random_segs(3), random_segs(4));
    c.bench_function("collide_1k", |b| {
        b.iter(|| {
            for (s1, s2) in segs_1.iter().zip(&segs_2) {
                black_box(s1.collide(s2, black_box(2_000)));
            }
        })
    });
}
