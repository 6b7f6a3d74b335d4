//! Ray casting: per-column DDA and the frame-level engine on top of it.

mod engine;
pub mod raycast;
mod types;

pub use engine::Engine;
pub use raycast::{Hit, Ray, cast, render};
pub use types::Screen;
