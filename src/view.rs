//! Terminal rendering of the board, a debug and demo surface.

use crate::board::Board;
use crate::config::BOARD_RADIUS;
use crate::coords::Grid;

/// Render the star board as text, one lattice row per line. Pins show as
/// their color letter, empty cells as `.`, and every position in `highlight`
/// (typically the legal destinations of a lifted pin) as `*`.
pub fn render_board(board: &Board, highlight: &[Grid]) -> String {
    let mut out = String::new();

    for y in -BOARD_RADIUS..=BOARD_RADIUS {
        let mut row = String::new();
        for x in -BOARD_RADIUS..=BOARD_RADIUS {
            let pos = Grid::new(x, y);
            let Some(cell) = board.get(pos) else {
                continue;
            };
            // stagger columns like the hex projection: two chars per cell
            // plus one for each half-step the row is shifted
            let col = (2 * x + y + 2 * BOARD_RADIUS) as usize;
            if row.len() < col {
                row.push_str(&" ".repeat(col - row.len()));
            }
            let glyph = if highlight.contains(&pos) {
                '*'
            } else {
                match cell.pin {
                    Some(color) => color.letter(),
                    None => '.',
                }
            };
            row.push(glyph);
        }
        out.push_str(&format!("{:>3} {}\n", y, row));
    }

    out
}

/// Convenience wrapper around [`render_board`] for quick inspection.
pub fn print_board(board: &Board, highlight: &[Grid]) {
    print!("{}", render_board(board, highlight));
}
