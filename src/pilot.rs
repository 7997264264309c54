use crate::coords::Grid;
use crate::game::Game;

/// Source of moves for the local seat.
///
/// Asked whenever the authority hands the turn to the local color; the
/// session validates the answer before anything goes on the wire. Returning
/// `None` means "no move offered" and leaves the session waiting for inbound
/// messages (spectating, or an interactive player backing out).
pub trait Pilot {
    fn choose_move(&mut self, game: &Game) -> Option<(Grid, Grid)>;
}
