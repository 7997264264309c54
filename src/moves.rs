//! Move legality: enumerate every cell a pin can reach in one turn.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::board::Board;
use crate::config::BOARD_SPAN;
use crate::coords::{grid_to_data, Grid};

/// All destinations reachable from `origin` in a single turn: one step into
/// an adjacent empty cell, or any chain of jumps over occupied neighbors into
/// empty landing cells.
///
/// Breadth-first search over the jump graph. Simple steps are only taken from
/// the true origin; jumps continue from every landing. The origin itself is
/// never part of the result, and the result is duplicate-free; callers should
/// treat it as a set (discovery order carries no meaning). The origin cell's
/// own occupancy is never examined, so the engine serves both a lifted pin
/// (origin emptied by the caller) and an in-place legality check.
///
/// A pin with no legal move yields an empty result.
pub fn legal_destinations(board: &Board, origin: Grid) -> Vec<Grid> {
    let mut visited = [[false; BOARD_SPAN]; BOARD_SPAN];
    let mut emitted = [[false; BOARD_SPAN]; BOARD_SPAN];
    let mut out = Vec::new();
    let mut todo = VecDeque::new();

    let Some((ox, oy)) = grid_to_data(origin) else {
        return out;
    };
    emitted[ox][oy] = true;
    todo.push_back(origin);

    let mut first = true;
    while let Some(pos) = todo.pop_front() {
        // positions are validated before they are queued
        let Some((dx, dy)) = grid_to_data(pos) else {
            continue;
        };
        if visited[dx][dy] {
            continue;
        }
        visited[dx][dy] = true;

        if !first {
            emit(&mut out, &mut emitted, pos);
        }

        for dir in 0..6 {
            let over = pos.neighbor(dir);
            let land = pos.landing(dir);
            if board.is_valid(over)
                && board.is_valid(land)
                && board.pin(over).is_some()
                && board.pin(land).is_none()
            {
                todo.push_back(land);
            }
            if first && board.is_valid(over) && board.pin(over).is_none() {
                emit(&mut out, &mut emitted, over);
            }
        }

        first = false;
    }

    out
}

fn emit(out: &mut Vec<Grid>, emitted: &mut [[bool; BOARD_SPAN]; BOARD_SPAN], pos: Grid) {
    if let Some((dx, dy)) = grid_to_data(pos) {
        if !emitted[dx][dy] {
            emitted[dx][dy] = true;
            out.push(pos);
        }
    }
}
