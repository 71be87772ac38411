//! Keyboard input handling

use game_core::InputState;

/// Gameplay keys recognized while driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKey {
    Left,
    Right,
    Throttle,
    Brake,
    Horn,
}

/// Map a key name to a driving key
pub fn drive_key(key: &str) -> Option<DriveKey> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(DriveKey::Left),
        "ArrowRight" | "d" | "D" => Some(DriveKey::Right),
        "ArrowUp" | "w" | "W" => Some(DriveKey::Throttle),
        "ArrowDown" | "s" | "S" => Some(DriveKey::Brake),
        " " => Some(DriveKey::Horn),
        _ => None,
    }
}

/// Apply a key-down event to the held-key set.
///
/// The manual throttle keys are dead while auto-acceleration is on.
pub fn apply_key_down(input: &mut InputState, key: DriveKey, auto_acceleration: bool) {
    match key {
        DriveKey::Left => input.left = true,
        DriveKey::Right => input.right = true,
        DriveKey::Throttle if !auto_acceleration => input.throttle = true,
        DriveKey::Brake if !auto_acceleration => input.brake = true,
        DriveKey::Horn => input.horn = true,
        _ => {}
    }
}

/// Apply a key-up event; releases always clear, whatever the settings
pub fn apply_key_up(input: &mut InputState, key: DriveKey) {
    match key {
        DriveKey::Left => input.left = false,
        DriveKey::Right => input.right = false,
        DriveKey::Throttle => input.throttle = false,
        DriveKey::Brake => input.brake = false,
        DriveKey::Horn => input.horn = false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_bindings() {
        assert_eq!(drive_key("ArrowLeft"), Some(DriveKey::Left));
        assert_eq!(drive_key("a"), Some(DriveKey::Left));
        assert_eq!(drive_key("D"), Some(DriveKey::Right));
        assert_eq!(drive_key("ArrowUp"), Some(DriveKey::Throttle));
        assert_eq!(drive_key("s"), Some(DriveKey::Brake));
        assert_eq!(drive_key(" "), Some(DriveKey::Horn));
        assert_eq!(drive_key("q"), None);
    }

    #[test]
    fn test_throttle_ignored_under_auto_acceleration() {
        let mut input = InputState::new();
        apply_key_down(&mut input, DriveKey::Throttle, true);
        apply_key_down(&mut input, DriveKey::Brake, true);
        assert!(!input.throttle && !input.brake);

        apply_key_down(&mut input, DriveKey::Throttle, false);
        assert!(input.throttle);
    }

    #[test]
    fn test_steering_works_in_both_modes() {
        let mut input = InputState::new();
        apply_key_down(&mut input, DriveKey::Left, true);
        assert!(input.left);
        apply_key_up(&mut input, DriveKey::Left);
        assert!(!input.left);
    }

    #[test]
    fn test_key_up_clears_even_if_mode_changed() {
        let mut input = InputState::new();
        apply_key_down(&mut input, DriveKey::Throttle, false);
        assert!(input.throttle);
        // Auto-acceleration toggled mid-press; the release still lands
        apply_key_up(&mut input, DriveKey::Throttle);
        assert!(!input.throttle);
    }
}
