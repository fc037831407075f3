use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{
    canonical_shape, clear_lines, collides, project_drop, rotate, Board, Position, Session,
};
use blockfall::types::{Command, PieceKind, Rotation};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.tick() {
                session.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let board = Board::from_rows(&["IIIIIIIIII"; 4]).unwrap();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| clear_lines(black_box(&board)))
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::from_rows(&["IIII.IIIII", "IIII.IIIII", "TTT..TTTTT"]).unwrap();
    let shape = canonical_shape(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| {
            collides(
                black_box(&board),
                shape,
                black_box(Position::new(3, 16)),
                Rotation::East,
            )
        })
    });
}

fn bench_project_drop(c: &mut Criterion) {
    let board = Board::from_rows(&["IIII.IIIII"; 6]).unwrap();
    let shape = canonical_shape(PieceKind::I);

    c.bench_function("project_drop", |b| {
        b.iter(|| project_drop(black_box(&board), shape, Position::new(3, 0), Rotation::East))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = canonical_shape(PieceKind::L);

    c.bench_function("rotate_3_steps", |b| b.iter(|| rotate(black_box(shape), 3)));
}

fn bench_apply(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start();

    c.bench_function("apply_move_right", |b| {
        b.iter(|| {
            if !session.apply(Command::MoveRight) {
                session.apply(Command::MoveLeft);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_project_drop,
    bench_rotate,
    bench_apply
);
criterion_main!(benches);
