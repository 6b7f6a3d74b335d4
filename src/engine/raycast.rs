//! Grid ray caster (DDA).
//!
//! One ray per screen column walks the grid a cell at a time along
//! whichever axis reaches its next cell boundary first, stops at the first
//! occupied cell and turns the perpendicular distance into a wall slice.
//!
//! * Perpendicular (camera-plane) distance is used, not Euclidean, so
//!   there is no fisheye bend.
//! * Hits reached by a Y step ("parallel" faces) are drawn darker.

use glam::{DVec2, IVec2};

use crate::{
    engine::types::Screen,
    renderer::{DrawCommand, Rgb},
    world::{Cell, EMPTY, Grid, Player},
};

/// Channel divisor for faces hit by a Y step.
pub const SIDE_SHADE: f64 = 2.5;

/// Cells past the edge of the grid read as plain wall.
const OUTSIDE_WALL: Cell = 1;

/// Base colour of a wall type.
pub fn wall_color(kind: Cell) -> Rgb {
    match kind {
        1 => Rgb::RED,
        2 => Rgb::GREEN,
        3 => Rgb::BLUE,
        4 => Rgb::WHITE,
        _ => Rgb::YELLOW,
    }
}

/*───────────────────────────── Ray state ─────────────────────────────*/

/// DDA walker for a single column. Lives for one cast only.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: DVec2,
    pub dir: DVec2,
    /// Cell the ray is currently in.
    pub cell: IVec2,
    /// Ray length at the next X / Y cell boundary.
    pub side: DVec2,
    /// Ray length between two consecutive X / Y boundaries.
    pub delta: DVec2,
    /// `-1` or `+1` per axis.
    pub step: IVec2,
    /// Last advance was along Y.
    pub parallel: bool,
}

impl Ray {
    pub fn new(origin: DVec2, dir: DVec2) -> Self {
        let cell = IVec2::new(origin.x as i32, origin.y as i32);
        let delta = DVec2::new(axis_delta(dir.x, dir.y), axis_delta(dir.y, dir.x));
        let step = IVec2::new(step_sign(dir.x), step_sign(dir.y));
        let side = DVec2::new(
            first_side(origin.x, cell.x, dir.x, delta.x),
            first_side(origin.y, cell.y, dir.y, delta.y),
        );

        Self {
            origin,
            dir,
            cell,
            side,
            delta,
            step,
            parallel: false,
        }
    }

    /// Move into the next cell along whichever axis is closer.
    ///
    /// Ties go to X; an axis whose direction component is zero has infinite
    /// side distance and is never chosen over a finite one.
    #[inline]
    pub fn advance(&mut self) {
        if self.side.x > self.side.y {
            self.side.y += self.delta.y;
            self.cell.y += self.step.y;
            self.parallel = true;
        } else {
            self.side.x += self.delta.x;
            self.cell.x += self.step.x;
            self.parallel = false;
        }
    }

    /// Distance from the camera plane to the face just entered.
    pub fn perp_distance(&self) -> f64 {
        if self.parallel {
            let offset = ((1 - self.step.y) / 2) as f64;
            ((self.cell.y as f64 - self.origin.y + offset) / self.dir.y).abs()
        } else {
            let offset = ((1 - self.step.x) / 2) as f64;
            ((self.cell.x as f64 - self.origin.x + offset) / self.dir.x).abs()
        }
    }
}

#[inline]
fn axis_delta(this: f64, other: f64) -> f64 {
    if this == 0.0 {
        f64::INFINITY
    } else {
        let r = other / this;
        (1.0 + r * r).sqrt()
    }
}

#[inline]
fn step_sign(component: f64) -> i32 {
    if component < 0.0 { -1 } else { 1 }
}

#[inline]
fn first_side(origin: f64, cell: i32, dir: f64, delta: f64) -> f64 {
    if dir == 0.0 {
        // also avoids 0 * inf when the origin sits on a boundary
        f64::INFINITY
    } else if dir < 0.0 {
        (origin - cell as f64) * delta
    } else {
        (cell as f64 + 1.0 - origin) * delta
    }
}

/*──────────────────────────── Single cast ────────────────────────────*/

/// Result of one cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub cell: IVec2,
    pub kind: Cell,
    pub parallel: bool,
    pub distance: f64,
    /// Cells stepped through, including the hit cell.
    pub steps: usize,
}

/// Walk from `origin` along `dir` until an occupied cell is entered.
pub fn cast(grid: &Grid, origin: DVec2, dir: DVec2) -> Hit {
    let mut ray = Ray::new(origin, dir);
    let mut steps = 0;

    let kind = loop {
        ray.advance();
        steps += 1;

        let cell = usize::try_from(ray.cell.x)
            .ok()
            .zip(usize::try_from(ray.cell.y).ok())
            .and_then(|(x, y)| grid.cell(x, y));
        match cell {
            Some(EMPTY) => continue,
            Some(kind) => break kind,
            None => break OUTSIDE_WALL,
        }
    };

    Hit {
        cell: ray.cell,
        kind,
        parallel: ray.parallel,
        distance: ray.perp_distance(),
        steps,
    }
}

/*─────────────────────────── Column slices ───────────────────────────*/

/// On-screen wall height for `distance`, always within `0 ..= screen_h`.
///
/// Zero, NaN or infinite distances clamp instead of failing.
#[inline]
pub fn wall_height(distance: f64, screen_h: usize) -> usize {
    // float→int `as` saturates and maps NaN to 0
    ((screen_h as f64 / distance).abs() as usize).min(screen_h)
}

/// Inclusive row range of a slice of `line_h` pixels centred on the screen.
#[inline]
pub fn slice_rows(line_h: usize, screen_h: usize) -> (usize, usize) {
    let (line_h, h) = (line_h as i64, screen_h as i64);
    let start = (h / 2 - line_h / 2).max(0);
    let end = (h / 2 + line_h / 2).min(h - 1).max(0);
    (start as usize, end as usize)
}

/// Draw command for one screen column.
pub fn column(grid: &Grid, player: &Player, screen: Screen, x: usize) -> DrawCommand {
    let ray_dir = player.dir() + player.plane() * screen.camera_x(x);
    let hit = cast(grid, player.pos, ray_dir);

    let mut color = wall_color(hit.kind);
    if hit.parallel {
        color = color.darken(SIDE_SHADE);
    }

    let (row_start, row_end) = slice_rows(wall_height(hit.distance, screen.h), screen.h);
    DrawCommand {
        column: x,
        row_start,
        row_end,
        color,
    }
}

/// Cast every column left to right into `out` (cleared first).
pub fn render_into(grid: &Grid, player: &Player, screen: Screen, out: &mut Vec<DrawCommand>) {
    out.clear();
    out.extend((0..screen.w).map(|x| column(grid, player, screen, x)));
}

/// One draw command per column, ordered left to right.
pub fn render(grid: &Grid, player: &Player, width: usize, height: usize) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(width);
    render_into(grid, player, Screen::new(width, height), &mut out);
    out
}

/*──────────────────────────────── Tests ───────────────────────────────*/
