//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The ray caster produces one [`DrawCommand`] per screen column and hands
//! the whole list to a type that implements [`Renderer`].
//!
//! * A back-end only has to draw a solid vertical segment per column.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

pub mod software;

pub use software::Software;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// 8-bit RGB colour of one wall slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Divide every channel by `factor`, truncating.
    pub fn darken(self, factor: f64) -> Self {
        let f = |c: u8| (c as f64 / factor) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Pack into the frame-buffer format.
    #[inline]
    pub fn to_pixel(self) -> Rgba {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// One solid wall slice: rows `row_start ..= row_end` of `column`.
///
/// Rows are already clamped to the screen by the producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    pub column: usize,
    pub row_start: usize,
    pub row_end: usize,
    pub color: Rgb,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one vertical slice into the internal buffer.
    fn draw_column(&mut self, cmd: &DrawCommand);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Whatever the closure returns is passed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, T>(
        &mut self,
        width: usize,
        height: usize,
        cmds: &[DrawCommand],
        submit: F,
    ) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.begin_frame(width, height);
        for c in cmds {
            self.draw_column(c);
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
