use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sternhalma::{legal_destinations, Board, Color, Grid, BOARD_CELLS};

fn empty_board() -> Board {
    let mut board = Board::generate();
    for pos in board.positions() {
        board.set_pin(pos, None).unwrap();
    }
    board
}

fn sorted(mut v: Vec<Grid>) -> Vec<Grid> {
    v.sort();
    v
}

#[test]
fn back_camp_pin_steps_into_empty_neighbors_only() {
    // (0, -4) is a red pin on the camp's inner edge: three empty neighbors
    // toward the center, two occupied camp neighbors, one off-board side.
    let board = Board::generate();
    let dests = legal_destinations(&board, Grid::new(0, -4));

    let expected = vec![Grid::new(-1, -4), Grid::new(-1, -3), Grid::new(0, -3)];
    assert_eq!(sorted(dests), sorted(expected));
}

#[test]
fn jump_chain_reaches_both_landings_and_no_hurdles() {
    let mut board = empty_board();
    board.set_pin(Grid::new(0, 0), Some(Color::Red)).unwrap();
    board.set_pin(Grid::new(1, -1), Some(Color::Green)).unwrap();
    board.set_pin(Grid::new(3, -3), Some(Color::Green)).unwrap();

    let dests = legal_destinations(&board, Grid::new(0, 0));

    assert!(dests.contains(&Grid::new(2, -2)), "first landing");
    assert!(dests.contains(&Grid::new(4, -4)), "chained landing");
    assert!(!dests.contains(&Grid::new(1, -1)), "hurdle is not a destination");
    assert!(!dests.contains(&Grid::new(3, -3)), "hurdle is not a destination");
    assert!(!dests.contains(&Grid::new(0, 0)), "origin is never emitted");

    // everything else must be a plain step into an empty neighbor
    let steps = vec![
        Grid::new(1, 0),
        Grid::new(0, -1),
        Grid::new(-1, 0),
        Grid::new(-1, 1),
        Grid::new(0, 1),
    ];
    let jumps = vec![Grid::new(2, -2), Grid::new(4, -4)];
    let expected: Vec<_> = steps.into_iter().chain(jumps).collect();
    assert_eq!(sorted(dests), sorted(expected));
}

#[test]
fn enclosed_corner_pin_cannot_move() {
    // the rearmost camp cell: both on-board neighbors are camp pins and both
    // jump landings behind them are occupied too
    let board = Board::generate();
    let dests = legal_destinations(&board, Grid::new(4, -8));
    assert!(dests.is_empty());
}

#[test]
fn search_is_bounded_and_duplicate_free_on_the_starting_board() {
    let board = Board::generate();
    for origin in board.positions() {
        let dests = legal_destinations(&board, origin);
        assert!(dests.len() <= BOARD_CELLS);
        assert!(!dests.contains(&origin));
        let mut unique = dests.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), dests.len(), "duplicates from {:?}", origin);
    }
}

#[test]
fn search_is_bounded_on_scattered_boards() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut board = empty_board();
        for pos in board.positions() {
            if rng.random_range(0..3) == 0 {
                let color = match rng.random_range(0..3) {
                    0 => Color::Red,
                    1 => Color::Green,
                    _ => Color::Blue,
                };
                board.set_pin(pos, Some(color)).unwrap();
            }
        }
        for origin in board.positions() {
            let dests = legal_destinations(&board, origin);
            assert!(dests.len() < BOARD_CELLS);
            assert!(!dests.contains(&origin));
            let mut unique = dests.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), dests.len());
        }
    }
}

#[test]
fn lifted_origin_can_be_landed_over_but_not_emitted() {
    // a cycle of jumps that would return to the origin must terminate and
    // must not emit the origin itself
    let mut board = empty_board();
    board.set_pin(Grid::new(1, 0), Some(Color::Red)).unwrap();
    board.set_pin(Grid::new(3, 0), Some(Color::Red)).unwrap();
    board.set_pin(Grid::new(4, -1), Some(Color::Red)).unwrap();

    // origin (2, 0) lifted by the caller
    let dests = legal_destinations(&board, Grid::new(2, 0));
    assert!(!dests.contains(&Grid::new(2, 0)));
}
