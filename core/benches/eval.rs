use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wyrmsnake_core::board::{Board, BoardInput, Point, SnakeInput};
use wyrmsnake_core::eval::eval;

fn p(x: i32, y: i32) -> Point {
    Point { x, y }
}

fn midgame_board() -> Board {
    Board::new(BoardInput {
        width: 11,
        height: 11,
        food: vec![p(7, 9), p(9, 4), p(0, 2), p(5, 5)],
        you_id: "you".into(),
        snakes: vec![
            SnakeInput {
                id: "you".into(),
                length: 7,
                health: 93,
                head: p(7, 4),
                body: vec![p(7, 4), p(6, 4), p(5, 4), p(4, 4), p(4, 5), p(5, 5), p(6, 5)],
            },
            SnakeInput {
                id: "opp".into(),
                length: 11,
                health: 97,
                head: p(7, 0),
                body: vec![
                    p(7, 0),
                    p(6, 0),
                    p(5, 0),
                    p(4, 0),
                    p(4, 1),
                    p(4, 2),
                    p(3, 2),
                    p(2, 2),
                    p(1, 2),
                    p(0, 2),
                    p(0, 3),
                ],
            },
        ],
    })
    .unwrap()
}

fn bench_eval(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("eval 2-snake 11x11", |b| b.iter(|| black_box(eval(black_box(&board)))));
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
