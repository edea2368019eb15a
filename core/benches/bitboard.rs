use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wyrmsnake_core::bitboard::{adj, popcount, Move};

fn masks(width: u32, height: u32) -> (u128, u128) {
    let board_mask: u128 = (1 << (width * height)) - 1;
    let mut x_mask: u128 = 0;
    for _ in 0..height {
        x_mask <<= width;
        x_mask |= 1;
    }
    (board_mask, board_mask & !x_mask)
}

fn bench_adj(c: &mut Criterion) {
    let (board_mask, x_mask) = masks(11, 11);
    let cluster: u128 = 0b111_0101_0011 << 40;
    c.bench_function("adj 11x11 cluster", |b| {
        b.iter(|| black_box(adj(black_box(cluster), 11, board_mask, x_mask)))
    });
}

fn bench_popcount(c: &mut Criterion) {
    let full: u128 = (1 << 121) - 1;
    c.bench_function("popcount full 11x11", |b| b.iter(|| black_box(popcount(black_box(full)))));
}

fn bench_move_roundtrip(c: &mut Criterion) {
    c.bench_function("move index roundtrip", |b| {
        b.iter(|| {
            for m in Move::ALL {
                black_box(Move::from_index(black_box(m.index())));
            }
        })
    });
}

criterion_group!(benches, bench_adj, bench_popcount, bench_move_roundtrip);
criterion_main!(benches);
