use std::io::{self, BufRead, Write};

use crate::coords::Grid;
use crate::game::Game;
use crate::pilot::Pilot;
use crate::view::render_board;

/// Interactive pilot: prints the board and reads a move from stdin.
///
/// Moves are entered as two grid coordinates, `x,y -> x,y` (the arrow is
/// optional). An empty line skips the prompt and leaves the session waiting.
pub struct CliPilot;

impl CliPilot {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, game: &Game) -> io::Result<Option<(Grid, Grid)>> {
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            print!("your move (x,y -> x,y): ");
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match parse_move(trimmed) {
                Some((from, to)) => {
                    if let Err(e) = game.validate_move(from, to) {
                        println!("rejected: {}", e);
                        continue;
                    }
                    return Ok(Some((from, to)));
                }
                None => println!("could not parse that; example: 0,-4 -> 0,-3"),
            }
        }
    }
}

impl Default for CliPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for CliPilot {
    fn choose_move(&mut self, game: &Game) -> Option<(Grid, Grid)> {
        println!("{}", render_board(game.board(), &[]));
        if let Some(me) = game.me() {
            println!("you are {}", me);
        }
        self.prompt(game).ok().flatten()
    }
}

fn parse_move(input: &str) -> Option<(Grid, Grid)> {
    let mut coords = input
        .split("->")
        .flat_map(|part| part.split_whitespace())
        .filter(|s| !s.is_empty());
    let from = parse_coord(coords.next()?)?;
    let to = parse_coord(coords.next()?)?;
    if coords.next().is_some() {
        return None;
    }
    Some((from, to))
}

fn parse_coord(s: &str) -> Option<Grid> {
    let (x, y) = s.split_once(',')?;
    Some(Grid::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
