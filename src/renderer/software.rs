//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Fills an internal `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Every wall slice is a solid vertical run of one colour; columns never
//!   overlap, so no depth test is needed.
//! ---------------------------------------------------------------------------

use crate::renderer::{DrawCommand, Renderer, Rgba};

/// Colour the buffer is cleared to between frames.
pub const CLEAR_COLOR: Rgba = 0x00_000000;

/// Flat-shaded column renderer.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    pub fn new(width: usize, height: usize) -> Self {
        let mut sw = Self::default();
        sw.begin_frame(width, height);
        sw
    }

    /// Pixels of the frame currently being drawn.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, CLEAR_COLOR);
        }
        self.scratch.fill(CLEAR_COLOR);
    }

    fn draw_column(&mut self, cmd: &DrawCommand) {
        if cmd.column >= self.width || self.height == 0 {
            return;
        }
        /* producers clamp already; re-clamp so a bad command can't index out */
        let y0 = cmd.row_start.min(self.height - 1);
        let y1 = cmd.row_end.min(self.height - 1);
        let px = cmd.color.to_pixel();

        for y in y0..=y1 {
            self.scratch[y * self.width + cmd.column] = px;
        }
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RendererExt, Rgb};

    fn red_slice(column: usize, row_start: usize, row_end: usize) -> DrawCommand {
        DrawCommand {
            column,
            row_start,
            row_end,
            color: Rgb::RED,
        }
    }

    #[test]
    fn software_renders_column() {
        let mut sw = Software::default();
        let lit = sw.draw_frame(8, 8, &[red_slice(2, 1, 4)], |fb, w, h| {
            assert_eq!((w, h), (8, 8));
            (0..h)
                .filter(|y| fb[y * w + 2] == Rgb::RED.to_pixel())
                .collect::<Vec<_>>()
        });
        assert_eq!(lit, vec![1, 2, 3, 4]);
    }

    #[test]
    fn frame_is_cleared_between_draws() {
        let mut sw = Software::new(4, 4);
        sw.draw_frame(4, 4, &[red_slice(0, 0, 3)], |_, _, _| ());
        sw.begin_frame(4, 4);
        assert!(sw.pixels().iter().all(|&px| px == CLEAR_COLOR));
    }

    #[test]
    fn out_of_range_commands_are_clipped() {
        let mut sw = Software::default();
        sw.draw_frame(4, 4, &[red_slice(9, 0, 3), red_slice(1, 2, 99)], |fb, w, _| {
            assert_eq!(fb.iter().filter(|&&px| px != CLEAR_COLOR).count(), 2);
            assert_eq!(fb[3 * w + 1], Rgb::RED.to_pixel());
        });
    }
}
