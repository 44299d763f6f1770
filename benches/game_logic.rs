use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{tiles_for, Board, Game, NullRenderer, Piece, PieceId};
use blockfall::types::{Color, GameConfig, Orientation, ShapeKind, Tile};

fn bench_frame(c: &mut Criterion) {
    let mut game = Game::new(&GameConfig::default(), NullRenderer, 12345);
    let mut now = 0u64;

    c.bench_function("advance_time_16ms", |b| {
        b.iter(|| {
            now += 16;
            game.advance_time(black_box(now));
        })
    });
}

fn bench_tiles_for(c: &mut Criterion) {
    c.bench_function("tiles_for_all_kinds", |b| {
        b.iter(|| {
            for kind in ShapeKind::ALL {
                black_box(tiles_for(kind, Orientation::B, black_box(Tile::new(4, 8))));
            }
        })
    });
}

fn bench_place_remove(c: &mut Criterion) {
    let mut board = Board::default();
    let piece = Piece::new(ShapeKind::T);

    c.bench_function("place_remove", |b| {
        b.iter(|| {
            board.try_place(PieceId(1), &piece, black_box(Tile::new(4, 10)));
            board.remove(PieceId(1));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 16..20 {
                for column in 0..10 {
                    board.set(column, row, Some(Color::LightBlue));
                }
            }
            for row in board.full_row_indices() {
                board.clear_row(row);
            }
            black_box(board.occupied_count())
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_tiles_for,
    bench_place_remove,
    bench_clear_rows
);
criterion_main!(benches);
