use winit::keyboard::KeyCode;

use crate::animation::{
  Direction,
  Pose,
  Side,
};

/// A window-level request the core cannot satisfy itself; the host window
/// acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
  Quit,
  FullScreen,
  Windowed,
}

/// One action decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Window(WindowCommand),
  Adjust(Pose, Direction),
  ToggleAnimation,
  Punch(Side),
}

/// Decode a key press into an action. Unbound keys decode to None.
/// param key: The pressed key.
/// return: The decoded action, if the key is bound.
pub fn map_key(key: KeyCode) -> Option<Action> {
  match key {
    KeyCode::Escape => Some(Action::Window(WindowCommand::Quit)),
    KeyCode::KeyF => Some(Action::Window(WindowCommand::FullScreen)),
    KeyCode::KeyN => Some(Action::Window(WindowCommand::Windowed)),
    KeyCode::KeyQ => Some(Action::Adjust(Pose::One, Direction::Down)),
    KeyCode::KeyW => Some(Action::Adjust(Pose::One, Direction::Up)),
    KeyCode::KeyA => Some(Action::Adjust(Pose::Two, Direction::Down)),
    KeyCode::KeyS => Some(Action::Adjust(Pose::Two, Direction::Up)),
    KeyCode::Space => Some(Action::ToggleAnimation),
    KeyCode::KeyZ => Some(Action::Punch(Side::Left)),
    KeyCode::KeyX => Some(Action::Punch(Side::Right)),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pose_adjust_bindings() {
    assert_eq!(map_key(KeyCode::KeyQ), Some(Action::Adjust(Pose::One, Direction::Down)));
    assert_eq!(map_key(KeyCode::KeyW), Some(Action::Adjust(Pose::One, Direction::Up)));
    assert_eq!(map_key(KeyCode::KeyA), Some(Action::Adjust(Pose::Two, Direction::Down)));
    assert_eq!(map_key(KeyCode::KeyS), Some(Action::Adjust(Pose::Two, Direction::Up)));
  }

  #[test]
  fn test_punch_bindings() {
    assert_eq!(map_key(KeyCode::KeyZ), Some(Action::Punch(Side::Left)));
    assert_eq!(map_key(KeyCode::KeyX), Some(Action::Punch(Side::Right)));
  }

  #[test]
  fn test_unbound_keys_decode_to_none() {
    assert_eq!(map_key(KeyCode::KeyP), None);
    assert_eq!(map_key(KeyCode::Digit1), None);
  }
}
