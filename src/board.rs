//! The star-shaped board: cell storage, shape predicate and camp generation.

use alloc::vec::Vec;

use crate::common::{Color, GameError};
use crate::config::{BOARD_SPAN, CAMP_OVERRIDES, CAMP_RADIUS};
use crate::coords::{data_to_grid, grid_to_data, Grid};

/// A single board cell.
///
/// `camp` records which starting camp the cell belongs to and never changes
/// after generation; `pin` is the current occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub camp: Option<Color>,
    pub pin: Option<Color>,
}

/// Sparse 17×17 lattice holding exactly the 121 cells of the six-pointed
/// star. Owned by the session; the move engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Cell>; BOARD_SPAN]; BOARD_SPAN],
}

/// Star-of-David shape test on cube coordinates.
fn in_star(pos: Grid) -> bool {
    let u = pos.x.abs();
    let v = pos.y.abs();
    let w = pos.z().abs();
    let r = crate::config::BOARD_RADIUS;
    let c = CAMP_RADIUS;
    (u <= r && v <= c && w <= c) || (u <= c && v <= r && w <= c) || (u <= c && v <= c && w <= r)
}

impl Board {
    /// Build the starting board: three camps of fifteen pins each (red,
    /// green, blue), a neutral central hexagon and three vacated points.
    pub fn generate() -> Self {
        let mut board = Board {
            cells: [[None; BOARD_SPAN]; BOARD_SPAN],
        };

        for dx in 0..BOARD_SPAN {
            for dy in 0..BOARD_SPAN {
                let pos = data_to_grid(dx, dy);
                if !in_star(pos) {
                    continue;
                }

                let u = pos.x.abs();
                let v = pos.y.abs();
                let w = pos.z().abs();

                let camp = if (u + v + w) / 2 < CAMP_RADIUS {
                    // central hexagon
                    None
                } else if v >= CAMP_RADIUS && v > u && v > w {
                    if pos.y > 0 {
                        None
                    } else {
                        Some(Color::Red)
                    }
                } else if w >= CAMP_RADIUS && w > v && w > u {
                    if pos.z() > 0 {
                        None
                    } else {
                        Some(Color::Green)
                    }
                } else if u >= CAMP_RADIUS && u > v && u > w {
                    if pos.x > 0 {
                        None
                    } else {
                        Some(Color::Blue)
                    }
                } else {
                    None
                };

                board.cells[dx][dy] = Some(Cell { camp, pin: camp });
            }
        }

        // The generic rule misclassifies the six cells where a camp meets the
        // central hexagon; patch them up last.
        for (pos, color) in CAMP_OVERRIDES {
            if let Some((dx, dy)) = grid_to_data(pos) {
                board.cells[dx][dy] = Some(Cell {
                    camp: Some(color),
                    pin: Some(color),
                });
            }
        }

        board
    }

    /// Whether `pos` names an existing cell.
    pub fn is_valid(&self, pos: Grid) -> bool {
        self.get(pos).is_some()
    }

    pub fn get(&self, pos: Grid) -> Option<&Cell> {
        let (dx, dy) = grid_to_data(pos)?;
        self.cells[dx][dy].as_ref()
    }

    /// Occupant of `pos`, or `None` when the cell is empty or absent.
    pub fn pin(&self, pos: Grid) -> Option<Color> {
        self.get(pos).and_then(|cell| cell.pin)
    }

    /// Set or clear the occupant of an existing cell.
    pub fn set_pin(&mut self, pos: Grid, pin: Option<Color>) -> Result<(), GameError> {
        let (dx, dy) = grid_to_data(pos).ok_or(GameError::OutOfBounds)?;
        match self.cells[dx][dy].as_mut() {
            Some(cell) => {
                cell.pin = pin;
                Ok(())
            }
            None => Err(GameError::OutOfBounds),
        }
    }

    /// Move the occupant of `from` to `to`, emptying `from`. Trusted-source
    /// mutation: no legality check beyond cell existence. Both cells are
    /// checked before either is written, so a failure leaves the board
    /// untouched.
    pub fn apply_move(&mut self, from: Grid, to: Grid) -> Result<(), GameError> {
        let pin = self.get(from).ok_or(GameError::OutOfBounds)?.pin;
        if !self.is_valid(to) {
            return Err(GameError::OutOfBounds);
        }
        self.set_pin(to, pin)?;
        self.set_pin(from, None)
    }

    /// Grid coordinates of every existing cell, in data-space order.
    pub fn positions(&self) -> Vec<Grid> {
        let mut out = Vec::new();
        for dx in 0..BOARD_SPAN {
            for dy in 0..BOARD_SPAN {
                if self.cells[dx][dy].is_some() {
                    out.push(data_to_grid(dx, dy));
                }
            }
        }
        out
    }

    /// Iterator over `(position, cell)` pairs of existing cells.
    pub fn cells(&self) -> impl Iterator<Item = (Grid, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(dx, col)| {
            col.iter()
                .enumerate()
                .filter_map(move |(dy, cell)| cell.as_ref().map(|c| (data_to_grid(dx, dy), c)))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::generate()
    }
}
