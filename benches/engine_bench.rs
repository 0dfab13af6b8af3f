use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gess::board::{Board, Coord, Player};
use gess::game::Game;
use gess::rules::Move;

fn at(row: i32, col: i32) -> Coord {
    Coord::new(row, col).unwrap()
}

fn bench_has_ring(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("has_ring_opening", |b| {
        b.iter(|| board.has_ring(black_box(Player::White)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut board = Board::new();
    c.bench_function("validate_opening_move", |b| {
        b.iter(|| {
            let mut mv = Move::new(&mut board, Player::Black, at(3, 3), at(6, 3)).unwrap();
            black_box(mv.validate())
        })
    });
}

fn bench_play_pair(c: &mut Criterion) {
    c.bench_function("play_two_plies", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let first = game.play(at(3, 3), at(4, 3)).unwrap();
            let second = game.play(at(18, 3), at(17, 3)).unwrap();
            black_box((first, second))
        })
    });
}

criterion_group!(benches, bench_has_ring, bench_validate, bench_play_pair);
criterion_main!(benches);
