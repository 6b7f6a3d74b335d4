//! Platform seams: input, presentation and time.
//!
//! The frame loop only talks to these traits. [`MinifbHost`] and
//! [`SystemClock`] are the real implementations; tests script their own.

mod clock;
mod minifb_host;

pub use clock::SystemClock;
pub use minifb_host::MinifbHost;

use thiserror::Error;

use crate::{renderer::Rgba, sim::InputEvent};

/// Window-system failures. Always fatal for the loop.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    /// Presentation surface went away mid-run.
    #[error("presentation failed: {0}")]
    Present(String),
}

/// Input queue plus presentation surface.
pub trait Platform {
    /// Next pending event, [`InputEvent::None`] once the queue is drained.
    /// Never blocks.
    fn poll_input(&mut self) -> InputEvent;

    /// Show a finished frame (0x00RRGGBB, row-major).
    fn present(
        &mut self,
        frame: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<(), PlatformError>;
}

/// Monotonic millisecond timer with a blocking delay.
pub trait Clock {
    fn now_millis(&mut self) -> u64;
    fn sleep_millis(&mut self, ms: u64);
}
