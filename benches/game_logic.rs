use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{canonical_shape, Board, SequenceSource, Session, SessionConfig};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = Session::new(SessionConfig::default(), 12345).unwrap();
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let kinds = PieceKind::ALL.to_vec();
    let mut state =
        Session::with_source(SessionConfig::default(), SequenceSource::new(kinds)).unwrap();
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            state.hard_drop()
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::default();
    let shape = canonical_shape(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(4), black_box(10)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = canonical_shape(PieceKind::I);

    c.bench_function("rotate_cw", |b| b.iter(|| black_box(shape).rotate_cw()));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_collides,
    bench_rotate
);
criterion_main!(benches);
