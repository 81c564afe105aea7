use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pursuit::board::{BoardBuilder, Position, TicketKind, ALL_TICKET_KINDS};
use pursuit::setup::{subtract, Estimate};
use pursuit::Location;

fn random_positions(rng: &mut SmallRng, len: usize) -> Vec<Position> {
    (0..len).map(|_| Position(rng.gen_range(1..=199))).collect()
}

fn bench_subtract(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let general = random_positions(&mut rng, 200);
    let pursuers = random_positions(&mut rng, 5);

    c.bench_function("subtract_200_minus_5", |b| {
        b.iter(|| subtract(black_box(general.clone()), black_box(pursuers.clone())))
    });
}

fn bench_estimate(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(11);
    let general = random_positions(&mut rng, 18);
    let pursuers = random_positions(&mut rng, 5);

    c.bench_function("estimate_from_parts", |b| {
        b.iter(|| {
            Estimate::from_parts(
                Default::default(),
                black_box(general.clone()),
                black_box(pursuers.clone()),
            )
        })
    });
}

fn bench_board_build(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(3);
    // Roughly the size of the classic 199-position board.
    let edges: Vec<(i64, i64, TicketKind)> = (0..1000)
        .map(|_| {
            let kind = ALL_TICKET_KINDS[rng.gen_range(0..4)];
            (rng.gen_range(1..200), rng.gen_range(1..200), kind)
        })
        .collect();

    c.bench_function("board_build_1000_edges", |b| {
        b.iter(|| {
            let mut builder = BoardBuilder::new(200);
            for &(from, to, kind) in &edges {
                builder
                    .connect(from, to, kind, || Location::new("bench", 1))
                    .unwrap();
            }
            builder.build()
        })
    });
}

criterion_group!(benches, bench_subtract, bench_estimate, bench_board_build);
criterion_main!(benches);
