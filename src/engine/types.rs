/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub const fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }

    /// Normalised camera-plane offset of column `x`: `-1` at the left edge,
    /// approaching `+1` at the right edge.
    #[inline]
    pub fn camera_x(self, x: usize) -> f64 {
        2.0 * x as f64 / self.w as f64 - 1.0
    }
}
