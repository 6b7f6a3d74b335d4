use crate::{
    engine::{raycast, types::Screen},
    renderer::{DrawCommand, Renderer, RendererExt, Rgba},
    world::{Grid, Player},
};

/// Ray caster bound to one back-end and resolution.
///
/// Each frame the full list of column commands is computed first and
/// only then handed to the renderer in a single pass.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub screen: Screen,
    cmds: Vec<DrawCommand>,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, w: usize, h: usize) -> Self {
        Self {
            renderer,
            screen: Screen::new(w, h),
            cmds: Vec::with_capacity(w),
        }
    }

    /// Commands produced by the last `render_frame`.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.cmds
    }

    pub fn render_frame<F, T>(&mut self, grid: &Grid, player: &Player, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        raycast::render_into(grid, player, self.screen, &mut self.cmds);
        self.renderer
            .draw_frame(self.screen.w, self.screen.h, &self.cmds, submit)
    }
}
