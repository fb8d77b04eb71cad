//! Benchmarks for position manipulation and FEN handling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::{Bitboard, Move, Position, Role, Square, STARTING_FEN};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_fen_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_parse");

    for (name, fen) in [("startpos", STARTING_FEN), ("kiwipete", KIWIPETE)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &fen, |b, &fen| {
            b.iter(|| Position::try_from_fen(black_box(fen)).unwrap())
        });
    }

    group.finish();
}

fn bench_fen_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_format");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(&startpos).to_fen()));

    let kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| b.iter(|| black_box(&kiwipete).to_fen()));

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    // Italian opening up to the short castle.
    let line = [
        Move::new(Square::E2, Square::E4),
        Move::new(Square::E7, Square::E5),
        Move::new(Square::G1, Square::F3),
        Move::new(Square::B8, Square::C6),
        Move::new(Square::F1, Square::C4),
        Move::new(Square::F8, Square::C5),
        Move::new(Square::E1, Square::G1),
    ];
    group.bench_function("italian_line", |b| {
        b.iter(|| {
            let mut position = Position::new();
            for m in line {
                position.apply(black_box(m));
            }
            position
        })
    });

    let promotion = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    group.bench_function("promotion", |b| {
        b.iter(|| {
            let mut position = promotion;
            position.apply(black_box(Move::new_promotion(
                Square::A7,
                Square::A8,
                Role::Queen,
            )));
            position
        })
    });

    group.finish();
}

fn bench_board_get(c: &mut Criterion) {
    let position = Position::from_fen(KIWIPETE);
    c.bench_function("board_get_all_squares", |b| {
        b.iter(|| {
            let mut occupied = 0u32;
            for sq in Bitboard::ALL.iter() {
                if position.board.get(black_box(sq)).is_some() {
                    occupied += 1;
                }
            }
            occupied
        })
    });
}

criterion_group!(
    benches,
    bench_fen_parse,
    bench_fen_format,
    bench_apply,
    bench_board_get
);
criterion_main!(benches);
