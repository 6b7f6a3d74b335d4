use std::collections::VecDeque;

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use super::{Platform, PlatformError};
use crate::{renderer::Rgba, sim::InputEvent};

/// W/A/S/D → directional events.
fn key_event(key: Key) -> Option<InputEvent> {
    match key {
        Key::W => Some(InputEvent::KeyForward),
        Key::A => Some(InputEvent::KeyLeft),
        Key::S => Some(InputEvent::KeyBackward),
        Key::D => Some(InputEvent::KeyRight),
        _ => None,
    }
}

/// minifb window acting as both input queue and presentation surface.
///
/// minifb refreshes key state on `update_with_buffer`, so events are
/// gathered once after every present and then handed out one at a time.
pub struct MinifbHost {
    window: Window,
    pending: VecDeque<InputEvent>,
    fresh: bool,
}

impl MinifbHost {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, PlatformError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        // pacing is done by the frame loop
        window.set_target_fps(0);
        Ok(Self {
            window,
            pending: VecDeque::new(),
            fresh: true,
        })
    }

    fn collect_events(&mut self) {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.pending.push_back(InputEvent::Quit);
        }
        // down and up both produce the same event
        let pressed = self.window.get_keys_pressed(KeyRepeat::No);
        let released = self.window.get_keys_released();
        self.pending
            .extend(pressed.into_iter().chain(released).filter_map(key_event));
    }
}

impl Platform for MinifbHost {
    fn poll_input(&mut self) -> InputEvent {
        if self.fresh {
            self.fresh = false;
            self.collect_events();
        }
        self.pending.pop_front().unwrap_or_default()
    }

    fn present(
        &mut self,
        frame: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<(), PlatformError> {
        self.window.update_with_buffer(frame, width, height)?;
        self.fresh = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_mapping() {
        assert_eq!(key_event(Key::W), Some(InputEvent::KeyForward));
        assert_eq!(key_event(Key::A), Some(InputEvent::KeyLeft));
        assert_eq!(key_event(Key::S), Some(InputEvent::KeyBackward));
        assert_eq!(key_event(Key::D), Some(InputEvent::KeyRight));
        assert_eq!(key_event(Key::Space), None);
    }
}
