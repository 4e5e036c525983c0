//! Benchmarks for rules-engine query performance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Board, Side, Square};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.all_legal_moves(Side::White)))
    });

    let middlegame = Board::try_from_fen(MIDDLEGAME).unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.all_legal_moves(Side::White)))
    });

    let kiwipete = Board::try_from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.all_legal_moves(Side::White)))
    });

    group.finish();
}

fn bench_is_legal_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_legal_move");

    // every (from, to) pair, the way a UI would sweep highlights
    let middlegame = Board::try_from_fen(MIDDLEGAME).unwrap();
    group.bench_function("all_pairs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for from in Square::ALL {
                for to in Square::ALL {
                    if middlegame.is_legal_move(black_box(from), black_box(to)) {
                        count += 1;
                    }
                }
            }
            count
        })
    });

    let e1 = Square::new(7, 4).unwrap();
    let g1 = Square::new(7, 6).unwrap();
    group.bench_function("castling", |b| {
        b.iter(|| middlegame.is_legal_move(black_box(e1), black_box(g1)))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.status())));

    let mate = Board::try_from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
    group.bench_function("back_rank_mate", |b| b.iter(|| black_box(mate.status())));

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_is_legal_move, bench_status);
criterion_main!(benches);
