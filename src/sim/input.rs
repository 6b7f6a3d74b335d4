use crate::world::{InputFlags, Player};

/// One event from the platform's input queue.
///
/// Key-down and key-up of the same key both arrive as the same variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputEvent {
    /// Queue is empty.
    #[default]
    None,
    /// Window closed / quit requested.
    Quit,
    KeyForward,
    KeyLeft,
    KeyBackward,
    KeyRight,
}

impl InputEvent {
    /// Flag affected by this event.
    pub fn flag(self) -> Option<InputFlags> {
        match self {
            InputEvent::None => None,
            InputEvent::Quit => Some(InputFlags::EXIT),
            InputEvent::KeyForward => Some(InputFlags::FORWARD),
            InputEvent::KeyLeft => Some(InputFlags::LEFT),
            InputEvent::KeyBackward => Some(InputFlags::BACKWARD),
            InputEvent::KeyRight => Some(InputFlags::RIGHT),
        }
    }
}

/// Fold one event into the player's key state.
///
/// Directional keys toggle on every transition; quit latches `EXIT`.
pub fn apply_event(player: &mut Player, event: InputEvent) {
    match event {
        InputEvent::None => {}
        InputEvent::Quit => player.keys.insert(InputFlags::EXIT),
        key => {
            if let Some(flag) = key.flag() {
                player.toggle(flag);
                tracing::debug!(?flag, held = player.keys.contains(flag), "key toggled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_cancel_out() {
        let mut p = Player::spawn();
        for ev in [
            InputEvent::KeyForward,
            InputEvent::KeyLeft,
            InputEvent::KeyBackward,
            InputEvent::KeyRight,
        ] {
            apply_event(&mut p, ev);
            assert!(p.keys.contains(ev.flag().unwrap()));
            apply_event(&mut p, ev);
            assert_eq!(p.keys, InputFlags::empty());
        }
    }

    #[test]
    fn quit_latches() {
        let mut p = Player::spawn();
        apply_event(&mut p, InputEvent::Quit);
        apply_event(&mut p, InputEvent::Quit);
        assert!(p.wants_exit());
    }

    #[test]
    fn none_is_ignored() {
        let mut p = Player::spawn();
        apply_event(&mut p, InputEvent::KeyRight);
        apply_event(&mut p, InputEvent::None);
        assert_eq!(p.keys, InputFlags::RIGHT);
    }
}
