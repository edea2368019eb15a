use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wyrmsnake_core::board::{Board, BoardInput, Point, SnakeInput};
use wyrmsnake_core::config::{EVAL_MAX, EVAL_MIN, MAX_DEPTH};
use wyrmsnake_core::search::Search;

fn p(x: i32, y: i32) -> Point {
    Point { x, y }
}

fn two_snake_board() -> Board {
    Board::new(BoardInput {
        width: 11,
        height: 11,
        food: vec![p(5, 5), p(0, 10)],
        you_id: "you".into(),
        snakes: vec![
            SnakeInput {
                id: "you".into(),
                length: 5,
                health: 80,
                head: p(5, 4),
                body: vec![p(5, 4), p(5, 3), p(5, 2), p(4, 2), p(4, 3)],
            },
            SnakeInput {
                id: "opp".into(),
                length: 4,
                health: 80,
                head: p(2, 8),
                body: vec![p(2, 8), p(2, 7), p(2, 6), p(2, 5)],
            },
        ],
    })
    .unwrap()
}

fn bench_fixed_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("search depth");
    for depth in [2, 4, 6] {
        group.bench_function(format!("depth {depth}"), |b| {
            b.iter(|| {
                let mut board = two_snake_board();
                let mut evals = vec![[0i32; 4]; MAX_DEPTH + 1];
                let deadline = Instant::now() + Duration::from_secs(10);
                let mut search = Search::new(&mut board, deadline);
                black_box(search.turn(&mut evals, EVAL_MIN, EVAL_MAX, depth).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed_depth);
criterion_main!(benches);
