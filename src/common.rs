//! Shared types: pin colors and the game-side error enum.

/// Color of a camp or pin. The starting layout populates three camps; an
/// absent color (`Option::None`) stands for an empty cell or a neutral camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// One-letter tag used by the terminal view.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// Errors returned by board mutations and move validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate is outside the lattice or names a cell that does not exist.
    OutOfBounds,
    /// Operation needs a pin but the cell is empty.
    EmptyField,
    /// A drag is already in progress.
    DragInProgress,
    /// No drag in progress to complete.
    NoDrag,
    /// It is not the local player's turn.
    NotYourTurn,
    /// The lifted pin does not belong to the local player.
    NotYourPin,
    /// Target cell already holds a pin.
    OccupiedTarget,
    /// Target is not reachable from the origin this turn.
    IllegalDestination,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "coordinate is not a board cell"),
            GameError::EmptyField => write!(f, "cell holds no pin"),
            GameError::DragInProgress => write!(f, "a drag is already in progress"),
            GameError::NoDrag => write!(f, "no drag in progress"),
            GameError::NotYourTurn => write!(f, "not your turn"),
            GameError::NotYourPin => write!(f, "pin belongs to another player"),
            GameError::OccupiedTarget => write!(f, "target cell is occupied"),
            GameError::IllegalDestination => write!(f, "target is not reachable this turn"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
