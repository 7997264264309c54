//! Messages exchanged between the client and the remote authority.
//!
//! Positions on the wire are always grid-space coordinates; conversion to
//! data-space indices happens inside the board. Serialization lives at the
//! transport boundary; the core only sees well-formed values.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::Color;
use crate::coords::Grid;

/// Occupancy of one cell, as carried by field synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState {
    pub pos: Grid,
    pub pin: Option<Color>,
}

/// One entry of the lobby game list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub id: u32,
    /// Seat held by the asking player in this game, if any.
    pub player: Option<Color>,
    pub current: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Create an account and log in.
    Register { name: String, password: String },
    /// Log in with existing credentials.
    Login { name: String, password: String },
    /// Authority's answer to `Register`/`Login`.
    LoginResult { name: String, ok: bool },
    /// Create a new game and take the first seat.
    NewGame,
    /// Take a free seat in an open game.
    JoinGame { id: u32 },
    /// Attach to a game to play or spectate.
    ChangeGame { id: u32 },
    /// Authority's answer to `ChangeGame`, carrying the seat assignment.
    GameChanged { game: GameSummary },
    /// Ask for the lobby game list.
    GameInfoRequest,
    /// Lobby game list, or a single entry after `NewGame`/`JoinGame`.
    GameInfo { games: Vec<GameSummary> },
    /// Ask for a full board synchronization.
    FieldInfoRequest,
    /// Board synchronization, full or partial. Applied as-is.
    FieldInfo { fields: Vec<FieldState> },
    /// Turn changed; `None` means the game is over.
    TurnInfo { current: Option<Color> },
    /// As a request: ask the authority to perform a move. As a broadcast:
    /// a confirmed move to apply without re-checking.
    Move { from: Grid, to: Grid },
}
