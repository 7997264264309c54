//! Drag lifecycle for pointer-driven frontends.
//!
//! Lifting a pin removes it from the board while the drag is in progress;
//! that window is the only time the board is deliberately inconsistent, and
//! every exit path puts the pin back before the controller returns to
//! steady state.

use alloc::vec::Vec;

use crate::common::{Color, GameError};
use crate::coords::{Grid, Layout, Pixel};
use crate::game::Game;

/// Explicit drag state machine.
///
/// `Idle --lift--> Dragging --valid drop--> AwaitingConfirmation --resolve--> Idle`,
/// with `Dragging --invalid drop / cancel--> Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        origin: Grid,
        pin: Color,
        legal: Vec<Grid>,
    },
    AwaitingConfirmation {
        from: Grid,
        to: Grid,
    },
}

/// Result of releasing a dragged pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Drop was invalid; the pin is back at its origin and nothing was sent.
    Restored,
    /// Drop passed all checks; a move request should be sent to the
    /// authority and its confirmation awaited.
    Requested { from: Grid, to: Grid },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Destinations of the pin currently being dragged; empty otherwise.
    pub fn legal(&self) -> &[Grid] {
        match &self.state {
            DragState::Dragging { legal, .. } => legal,
            _ => &[],
        }
    }

    /// Pick up the pin under `at`. On success the pin is off the board, the
    /// reachable destinations are captured for rendering, and the controller
    /// is `Dragging`. Any pin may be lifted; ownership and turn order are
    /// enforced at drop time.
    pub fn lift(&mut self, game: &mut Game, layout: &Layout, at: Pixel) -> Result<&[Grid], GameError> {
        if !matches!(self.state, DragState::Idle) {
            return Err(GameError::DragInProgress);
        }
        let origin = layout.pixel_to_grid(at);
        if !game.board().is_valid(origin) {
            return Err(GameError::OutOfBounds);
        }
        let pin = game.board().pin(origin).ok_or(GameError::EmptyField)?;

        game.board_mut().set_pin(origin, None)?;
        let legal = game.legal_destinations(origin);
        self.state = DragState::Dragging { origin, pin, legal };
        Ok(self.legal())
    }

    /// Release the dragged pin over `at`.
    ///
    /// The pin is restored to its origin on every path; a valid drop
    /// additionally yields the move request to send and parks the controller
    /// in `AwaitingConfirmation` until the authority answers. The board
    /// itself is only changed by the confirmed move relayed back through
    /// [`Game::apply_move`] or a field sync.
    pub fn drop(
        &mut self,
        game: &mut Game,
        layout: &Layout,
        at: Pixel,
    ) -> Result<DropOutcome, GameError> {
        let DragState::Dragging { origin, pin, legal } =
            core::mem::replace(&mut self.state, DragState::Idle)
        else {
            return Err(GameError::NoDrag);
        };

        game.board_mut().set_pin(origin, Some(pin))?;

        let target = layout.pixel_to_grid(at);
        let valid = game.board().is_valid(target)
            && game.board().pin(target).is_none()
            && legal.contains(&target)
            && game.me() == Some(pin)
            && game.current() == Some(pin);

        if valid {
            self.state = DragState::AwaitingConfirmation {
                from: origin,
                to: target,
            };
            Ok(DropOutcome::Requested {
                from: origin,
                to: target,
            })
        } else {
            Ok(DropOutcome::Restored)
        }
    }

    /// Abort an in-progress drag, restoring the pin to its origin.
    pub fn cancel(&mut self, game: &mut Game) -> Result<(), GameError> {
        match core::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { origin, pin, .. } => game.board_mut().set_pin(origin, Some(pin)),
            state => {
                self.state = state;
                Ok(())
            }
        }
    }

    /// Leave `AwaitingConfirmation` once the authority has confirmed or
    /// rejected the requested move. The board mutation, if any, arrives
    /// separately through the session.
    pub fn resolve(&mut self) {
        if matches!(self.state, DragState::AwaitingConfirmation { .. }) {
            self.state = DragState::Idle;
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
