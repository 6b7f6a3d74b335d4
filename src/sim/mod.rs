mod frame;
mod input;
mod movement;

pub use frame::{FrameLoop, FrameStats, LoopState};
pub use input::{InputEvent, apply_event};
pub use movement::{MOVE_DIVISOR, move_player};
