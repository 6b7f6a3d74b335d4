//! Player translation and turning driven by the held-key flags.

use glam::DVec2;

use crate::world::{Grid, InputFlags, Player};

/// Milliseconds per world unit (and per radian when turning).
pub const MOVE_DIVISOR: f64 = 300.0;

/// Apply every held key for a frame that lasted `elapsed_ms`.
///
/// Order: forward, backward, turn right, turn left. The caller keeps
/// `elapsed_ms` small enough that one step is well under a cell.
pub fn move_player(player: &mut Player, grid: &Grid, elapsed_ms: f64) {
    let step = elapsed_ms / MOVE_DIVISOR;
    let keys = player.keys;

    if keys.contains(InputFlags::FORWARD) {
        let delta = player.dir() * step;
        slide(player, grid, delta);
    }
    if keys.contains(InputFlags::BACKWARD) {
        let delta = player.dir() * -step;
        slide(player, grid, delta);
    }
    if keys.contains(InputFlags::RIGHT) {
        player.rotate(-step);
    }
    if keys.contains(InputFlags::LEFT) {
        player.rotate(step);
    }
}

/// Per-axis collision: X is tested against the old Y, then Y against the
/// new X, so a blocked axis doesn't stop the other one.
fn slide(player: &mut Player, grid: &Grid, delta: DVec2) {
    let pos = &mut player.pos;
    if grid.is_open_at(pos.x + delta.x, pos.y) {
        pos.x += delta.x;
    }
    if grid.is_open_at(pos.x, pos.y + delta.y) {
        pos.y += delta.y;
    }
}
