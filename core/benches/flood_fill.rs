use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn open_board(size: Coord) -> Board {
    Board::from_mine_coords((size, size), &[(size - 1, size - 1)]).unwrap()
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [9, 64, 255] {
        let board = open_board(size);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| black_box(reveal_cell(&mut board, (0, 0))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    c.bench_function("first_reveal_9x9", |b| {
        let mut engine = GameEngine::new(
            GameConfig::default(),
            MemoryStore::new(),
            SystemClock,
            RandomSampler::from_seed_u64(0),
        );
        let state = engine.new_game();
        b.iter(|| black_box(engine.reveal(&state, (4, 4))))
    });
}

criterion_group!(benches, bench_flood_fill, bench_first_reveal);
criterion_main!(benches);
