//! BoardView driven by a real game

use blockfall::core::{Board, Game, Phase, Piece};
use blockfall::term::{BoardView, Rgb, Viewport};
use blockfall::types::{Color, GameConfig, ShapeKind, Tile, BACKGROUND_RGB};

fn view() -> BoardView {
    BoardView::new(2, Viewport::new(60, 30))
}

/// Framebuffer cell for board tile (column, row)
fn tile_cell(view: &BoardView, column: u16, row: u16) -> blockfall::term::Cell {
    let (x0, y0) = view.origin();
    view.frame().get(x0 + 1 + column * 2, y0 + 1 + row).unwrap()
}

#[test]
fn game_paints_active_piece() {
    let mut game = Game::new(&GameConfig::default(), view(), 1);
    assert!(game.add_piece(Piece::new(ShapeKind::Square), Tile::new(4, 1)));
    assert!(game.renderer_mut().take_dirty());

    let yellow = Rgb::from_tuple(Color::Yellow.rgb());
    assert_eq!(tile_cell(game.renderer(), 4, 1).style.fg, yellow);
    assert_eq!(tile_cell(game.renderer(), 5, 2).style.fg, yellow);
    assert_eq!(tile_cell(game.renderer(), 0, 0).ch, '·');
}

#[test]
fn clearing_row_fades_out() {
    let mut board = Board::default();
    for column in 0..8 {
        board.set(column, 19, Some(Color::Red));
    }
    let mut game = Game::with_board(&GameConfig::default(), board, view(), 1);
    assert!(game.add_piece(Piece::new(ShapeKind::Square), Tile::new(8, 18)));

    game.advance_time(0);
    assert_eq!(game.phase(), Phase::RowsClearing);
    let red = Rgb::from_tuple(Color::Red.rgb());
    assert_eq!(tile_cell(game.renderer(), 0, 19).style.fg, red);

    for t in 1..=5 {
        game.advance_time(t);
    }

    let faded = tile_cell(game.renderer(), 0, 19).style.fg;
    let background = Rgb::from_tuple(BACKGROUND_RGB);
    assert_ne!(faded, red);
    assert_eq!(faded, red.blend(background, game.fade()));
    // Rows above are untouched by the highlight.
    assert_eq!(
        tile_cell(game.renderer(), 8, 18).style.fg,
        Rgb::from_tuple(Color::Yellow.rgb())
    );
}

#[test]
fn resize_repaints_last_scene() {
    let mut game = Game::new(&GameConfig::default(), view(), 1);
    assert!(game.add_piece(Piece::new(ShapeKind::T), Tile::new(0, 0)));
    game.renderer_mut().take_dirty();

    game.renderer_mut().resize(Viewport::new(80, 40));

    assert!(game.renderer_mut().take_dirty());
    assert_eq!(game.renderer().frame().width(), 80);
    let purple = Rgb::from_tuple(Color::Purple.rgb());
    assert_eq!(tile_cell(game.renderer(), 1, 0).style.fg, purple);
}
