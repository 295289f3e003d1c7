//! Benchmarks for placement scoring on dense boards.
//!
//! Directions follow `(row + col) % 8`, so every right or down step turns
//! clockwise and the last placement completes a large number of sequences.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use compass_board::board::Board;
use compass_board::core::{Direction, Move, PlayerId, VertexId};
use compass_board::graph::BoardBuilder;
use compass_board::scoring::{backward_sequences, forward_sequences};

fn diagonal(width: usize, row: usize, col: usize) -> (VertexId, Direction) {
    (VertexId((row * width + col) as u64), Direction::from_index((row + col) % Direction::COUNT))
}

/// Fill a `size x size` grid except the centre vertex.
fn dense_board(size: usize) -> (Board, Move) {
    let mut board = BoardBuilder::grid(size, size).build().expect("grid board");
    let centre = (size / 2, size / 2);
    let player = PlayerId::new(0);

    for row in 0..size {
        for col in 0..size {
            if (row, col) == centre {
                continue;
            }
            let (vertex, direction) = diagonal(size, row, col);
            board.make_move(&Move::new(vertex, direction, player, 0)).expect("empty vertex");
        }
    }

    let (vertex, direction) = diagonal(size, centre.0, centre.1);
    (board, Move::new(vertex, direction, player, 0))
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");
    for size in [4, 6, 8] {
        let (board, mv) = dense_board(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut board = board.clone();
                black_box(board.make_move(black_box(&mv)).expect("centre is empty"))
            })
        });
    }
    group.finish();
}

fn bench_finder(c: &mut Criterion) {
    let (mut board, mv) = dense_board(8);
    board.make_move(&mv).expect("centre is empty");

    c.bench_function("forward_sequences_8x8", |b| {
        b.iter(|| black_box(forward_sequences(&board, black_box(mv.vertex))))
    });
    c.bench_function("backward_sequences_8x8", |b| {
        b.iter(|| black_box(backward_sequences(&board, black_box(mv.vertex))))
    });
}

criterion_group!(benches, bench_make_move, bench_finder);
criterion_main!(benches);
