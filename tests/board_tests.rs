use sternhalma::{Board, Color, GameError, Grid, BOARD_CELLS, CAMP_OVERRIDES, CAMP_SIZE};

#[test]
fn board_has_exactly_121_cells() {
    let board = Board::generate();
    assert_eq!(board.positions().len(), BOARD_CELLS);
    assert_eq!(board.cells().count(), BOARD_CELLS);
}

#[test]
fn three_camps_of_fifteen_each_start_full() {
    let board = Board::generate();
    for color in [Color::Red, Color::Green, Color::Blue] {
        let camp_cells: Vec<_> = board
            .cells()
            .filter(|(_, cell)| cell.camp == Some(color))
            .collect();
        assert_eq!(camp_cells.len(), CAMP_SIZE, "{} camp size", color);
        assert!(
            camp_cells.iter().all(|(_, cell)| cell.pin == Some(color)),
            "{} camp must start fully occupied",
            color
        );
    }

    let pins = board.cells().filter(|(_, c)| c.pin.is_some()).count();
    assert_eq!(pins, 3 * CAMP_SIZE);
}

#[test]
fn neutral_cells_are_empty_at_start() {
    let board = Board::generate();
    for (pos, cell) in board.cells() {
        if cell.camp.is_none() {
            assert_eq!(cell.pin, None, "neutral cell {:?} must start empty", pos);
        }
    }
}

#[test]
fn override_cells_hold_their_colors() {
    let board = Board::generate();
    for (pos, color) in CAMP_OVERRIDES {
        let cell = board.get(pos).unwrap();
        assert_eq!(cell.camp, Some(color), "camp at {:?}", pos);
        assert_eq!(cell.pin, Some(color), "pin at {:?}", pos);
    }
}

#[test]
fn vacated_points_are_neutral() {
    // the mirror cells of the occupied camps: positive-v point interior
    let board = Board::generate();
    for pos in [Grid::new(-4, 5), Grid::new(-2, 6), Grid::new(-4, 8)] {
        let cell = board.get(pos).unwrap();
        assert_eq!(cell.camp, None);
        assert_eq!(cell.pin, None);
    }
}

#[test]
fn set_pin_rejects_absent_cells() {
    let mut board = Board::generate();
    assert_eq!(
        board.set_pin(Grid::new(8, 8), Some(Color::Red)),
        Err(GameError::OutOfBounds)
    );
    assert_eq!(
        board.set_pin(Grid::new(9, 0), Some(Color::Red)),
        Err(GameError::OutOfBounds)
    );
}

#[test]
fn failed_apply_move_leaves_the_board_unchanged() {
    let mut board = Board::generate();
    let before = board.clone();

    // absent origin, existing occupied target
    assert_eq!(
        board.apply_move(Grid::new(9, 9), Grid::new(0, -4)),
        Err(GameError::OutOfBounds)
    );
    assert_eq!(board, before);

    // existing occupied origin, absent target
    assert_eq!(
        board.apply_move(Grid::new(0, -4), Grid::new(8, 8)),
        Err(GameError::OutOfBounds)
    );
    assert_eq!(board, before);
}

#[test]
fn apply_move_transfers_the_pin() {
    let mut board = Board::generate();
    assert_eq!(board.pin(Grid::new(0, -4)), Some(Color::Red));
    board
        .apply_move(Grid::new(0, -4), Grid::new(0, -3))
        .unwrap();
    assert_eq!(board.pin(Grid::new(0, -4)), None);
    assert_eq!(board.pin(Grid::new(0, -3)), Some(Color::Red));
}
