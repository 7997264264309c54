use crate::common::Color;
use crate::coords::Grid;

/// Distance from the board center to the tip of a star point.
pub const BOARD_RADIUS: i32 = 8;

/// Side length of a starting camp triangle.
pub const CAMP_RADIUS: i32 = 4;

/// Width of the square data-space lattice the star is carved out of.
pub const BOARD_SPAN: usize = (2 * BOARD_RADIUS + 1) as usize;

/// Offset added per axis when converting grid coordinates to array indices.
pub const CENTER_OFFSET: i32 = BOARD_RADIUS;

/// Number of cells that exist on the star board.
pub const BOARD_CELLS: usize = 121;

/// Number of pins each active camp starts with.
pub const CAMP_SIZE: usize = 15;

/// Default hexagon circumradius in pixels.
pub const DEFAULT_HEX_RADIUS: f64 = 24.0;

/// Default pin marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 6.0;

/// Corner cells the generic camp rule misclassifies. These are assigned last,
/// verbatim, during board generation; they are a fixed property of the board
/// layout rather than something derivable from the shape predicate.
pub const CAMP_OVERRIDES: [(Grid, Color); 6] = [
    (Grid::new(0, -4), Color::Red),
    (Grid::new(-4, 0), Color::Blue),
    (Grid::new(-4, 4), Color::Blue),
    (Grid::new(0, 4), Color::Green),
    (Grid::new(4, 0), Color::Green),
    (Grid::new(4, -4), Color::Red),
];
