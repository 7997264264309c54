//! Coordinate spaces and the transforms between them.
//!
//! Three spaces are involved: *data space* (non-negative array indices into
//! the 17×17 lattice), *grid space* (signed axial hex coordinates centered on
//! the board middle, with the implied third cube coordinate `z = -x - y`) and
//! *pixel space* (screen pixels for a pointy-top hexagon layout). All
//! functions here are pure and total over well-formed numeric input.

use crate::config::{BOARD_RADIUS, CAMP_RADIUS, CENTER_OFFSET};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Columns between the board center and the leftmost drawn column. The
/// westernmost cells sit at `x + y/2 = -(CAMP_RADIUS + CAMP_RADIUS/2)`.
const COL_SHIFT: f64 = (CAMP_RADIUS + CAMP_RADIUS / 2) as f64;

/// Rows between the board center and the topmost drawn row.
const ROW_SHIFT: f64 = BOARD_RADIUS as f64;

/// Axial grid coordinate. `(0, 0)` is the board center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub x: i32,
    pub y: i32,
}

impl Grid {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Implied third cube coordinate.
    pub const fn z(self) -> i32 {
        -self.x - self.y
    }

    /// Neighbor one step along `direction` (an index into [`DIRECTIONS`]).
    pub fn neighbor(self, direction: usize) -> Grid {
        let (dx, dy) = DIRECTIONS[direction % 6];
        Grid::new(self.x + dx, self.y + dy)
    }

    /// Cell two steps along `direction`, the landing spot of a jump.
    pub fn landing(self, direction: usize) -> Grid {
        let (dx, dy) = DIRECTIONS[direction % 6];
        Grid::new(self.x + 2 * dx, self.y + 2 * dy)
    }
}

/// The six axial neighbor offsets, counterclockwise from east.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert data-space indices to a grid coordinate.
pub fn data_to_grid(x: usize, y: usize) -> Grid {
    Grid::new(x as i32 - CENTER_OFFSET, y as i32 - CENTER_OFFSET)
}

/// Convert a grid coordinate to data-space indices, if it lies inside the
/// 17×17 envelope.
pub fn grid_to_data(pos: Grid) -> Option<(usize, usize)> {
    if pos.x.abs() <= BOARD_RADIUS && pos.y.abs() <= BOARD_RADIUS {
        Some((
            (pos.x + CENTER_OFFSET) as usize,
            (pos.y + CENTER_OFFSET) as usize,
        ))
    } else {
        None
    }
}

/// Pixel-space layout parameters. The centering offsets are derived from the
/// board extents so that the projection and its inverse stay consistent for
/// any radius choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Hexagon circumradius in pixels.
    pub hex_radius: f64,
    /// Pin marker radius in pixels.
    pub marker_radius: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            hex_radius: crate::config::DEFAULT_HEX_RADIUS,
            marker_radius: crate::config::DEFAULT_MARKER_RADIUS,
        }
    }
}

impl Layout {
    pub const fn new(hex_radius: f64, marker_radius: f64) -> Self {
        Self {
            hex_radius,
            marker_radius,
        }
    }

    /// Pixel margin reserved left of / above the first cell center.
    fn margin(&self) -> f64 {
        self.marker_radius + 1.0
    }

    /// Project a grid coordinate to the pixel center of its cell.
    pub fn grid_to_pixel(&self, pos: Grid) -> Pixel {
        let x = pos.x as f64;
        let y = pos.y as f64;
        Pixel {
            x: self.hex_radius * SQRT_3 * (x + y / 2.0 + COL_SHIFT) + self.margin(),
            y: self.hex_radius * 1.5 * (y + ROW_SHIFT) + self.margin(),
        }
    }

    /// Map a pixel back to the grid cell it falls in.
    ///
    /// Inverts the projection into fractional axial coordinates and then
    /// applies cube rounding: each cube component is rounded independently
    /// and the one with the largest rounding error is recomputed from the
    /// other two, so the result always satisfies `x + y + z == 0` exactly.
    pub fn pixel_to_grid(&self, pos: Pixel) -> Grid {
        let y = (pos.y - self.margin()) / (self.hex_radius * 1.5) - ROW_SHIFT;
        let x = (pos.x - self.margin()) / (self.hex_radius * SQRT_3) - COL_SHIFT - y / 2.0;
        cube_round(x, y)
    }

    /// Overall canvas size that fits the whole board, for embedders that
    /// size their drawing surface from the layout.
    pub fn canvas_size(&self) -> (f64, f64) {
        let cols = 2.0 * COL_SHIFT;
        let rows = 2.0 * ROW_SHIFT;
        (
            self.hex_radius * SQRT_3 * cols + 2.0 * self.margin(),
            self.hex_radius * 1.5 * rows + 2.0 * self.margin(),
        )
    }
}

/// Round fractional axial coordinates to the nearest cell.
///
/// Ties are broken in a fixed order: x is corrected only when its error
/// strictly dominates, otherwise y is preferred over z.
pub fn cube_round(x: f64, y: f64) -> Grid {
    let z = -x - y;

    let rx = libm::round(x);
    let ry = libm::round(y);
    let rz = libm::round(z);

    let ex = libm::fabs(rx - x);
    let ey = libm::fabs(ry - y);
    let ez = libm::fabs(rz - z);

    let (rx, ry) = if ex > ey && ex > ez {
        (-ry - rz, ry)
    } else if ey > ez {
        (rx, -rx - rz)
    } else {
        // z absorbs the error; the axial pair is already consistent.
        (rx, ry)
    };

    Grid::new(rx as i32, ry as i32)
}
