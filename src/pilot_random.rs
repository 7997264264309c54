use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::coords::Grid;
use crate::game::Game;
use crate::pilot::Pilot;

/// Pilot that plays a uniformly random legal move. Used by the local
/// simulation mode and as a convenient scripted opponent in tests; a fixed
/// seed makes whole games reproducible.
pub struct RandomPilot {
    rng: SmallRng,
}

impl RandomPilot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self {
            rng: SmallRng::from_rng(&mut seed_rng),
        }
    }
}

#[cfg(feature = "std")]
impl Default for RandomPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for RandomPilot {
    fn choose_move(&mut self, game: &Game) -> Option<(Grid, Grid)> {
        let me = game.me()?;
        let movable: Vec<(Grid, Vec<Grid>)> = game
            .board()
            .cells()
            .filter(|(_, cell)| cell.pin == Some(me))
            .map(|(pos, _)| (pos, game.legal_destinations(pos)))
            .filter(|(_, dests)| !dests.is_empty())
            .collect();

        if movable.is_empty() {
            return None;
        }
        let (from, dests) = &movable[self.rng.random_range(0..movable.len())];
        let to = dests[self.rng.random_range(0..dests.len())];
        Some((*from, to))
    }
}
