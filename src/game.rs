//! Client-side game state: the board plus seat and turn bookkeeping.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{Color, GameError};
use crate::coords::Grid;
use crate::moves::legal_destinations;
use crate::protocol::FieldState;

/// One joined game as the client sees it.
///
/// Owns the [`Board`]; inbound updates from the authority are applied without
/// re-validation, while outbound moves pass the full turn, ownership and
/// reachability checks first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    me: Option<Color>,
    current: Option<Color>,
}

impl Game {
    /// Fresh game with the starting board, no seat and no turn information.
    pub fn new() -> Self {
        Self {
            board: Board::generate(),
            me: None,
            current: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The local player's color, `None` while spectating.
    pub fn me(&self) -> Option<Color> {
        self.me
    }

    pub fn set_me(&mut self, me: Option<Color>) {
        self.me = me;
    }

    /// Whose turn it is according to the authority; `None` when unknown or
    /// when the game has ended.
    pub fn current(&self) -> Option<Color> {
        self.current
    }

    pub fn set_turn(&mut self, current: Option<Color>) {
        self.current = current;
    }

    pub fn my_turn(&self) -> bool {
        self.me.is_some() && self.me == self.current
    }

    /// Apply a field synchronization from the authority (full or partial).
    /// Entries naming absent cells are reported, not applied.
    pub fn apply_fields(&mut self, fields: &[FieldState]) -> Result<(), GameError> {
        for field in fields {
            self.board.set_pin(field.pos, field.pin)?;
        }
        Ok(())
    }

    /// Apply a confirmed move from the authority. Trusted: no legality check.
    pub fn apply_move(&mut self, from: Grid, to: Grid) -> Result<(), GameError> {
        self.board.apply_move(from, to)
    }

    /// Destinations reachable from `origin` on the current board.
    pub fn legal_destinations(&self, origin: Grid) -> Vec<Grid> {
        legal_destinations(&self.board, origin)
    }

    /// Check a move the local player wants to request. Mirrors the checks the
    /// authority applies, so a request that passes here is expected to be
    /// confirmed.
    pub fn validate_move(&self, from: Grid, to: Grid) -> Result<(), GameError> {
        let me = self.me.ok_or(GameError::NotYourTurn)?;
        if self.current != Some(me) {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.is_valid(from) || !self.board.is_valid(to) {
            return Err(GameError::OutOfBounds);
        }
        if self.board.pin(from) != Some(me) {
            return Err(GameError::NotYourPin);
        }
        if self.board.pin(to).is_some() {
            return Err(GameError::OccupiedTarget);
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(GameError::IllegalDestination);
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
