use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Discrete commands the game reacts to. Only key-down edges produce
/// actions; held keys repeat through the platform's key repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Accelerate,
    Decelerate,
    SteerLeft,
    SteerRight,
    StartStop,
    Reset,
    Pause,
    Quit,
}

pub fn process_event(event: &Event) -> InputAction {
    match event {
        Event::Quit { .. } => InputAction::Quit,
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => action_for_key(*keycode),
        _ => InputAction::None,
    }
}

pub fn action_for_key(keycode: Keycode) -> InputAction {
    match keycode {
        Keycode::W => InputAction::Accelerate,
        Keycode::S => InputAction::Decelerate,
        Keycode::A => InputAction::SteerLeft,
        Keycode::D => InputAction::SteerRight,
        Keycode::Return => InputAction::StartStop,
        Keycode::R => InputAction::Reset,
        Keycode::P => InputAction::Pause,
        Keycode::Escape => InputAction::Quit,
        _ => InputAction::None,
    }
}

pub fn print_controls() {
    log::info!("Controls: Enter start/stop | P pause | R reset (while not running) | W/S speed up/down | A/D steer | Esc quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driving_keys() {
        assert_eq!(action_for_key(Keycode::W), InputAction::Accelerate);
        assert_eq!(action_for_key(Keycode::S), InputAction::Decelerate);
        assert_eq!(action_for_key(Keycode::A), InputAction::SteerLeft);
        assert_eq!(action_for_key(Keycode::D), InputAction::SteerRight);
        assert_eq!(action_for_key(Keycode::Return), InputAction::StartStop);
        assert_eq!(action_for_key(Keycode::R), InputAction::Reset);
        assert_eq!(action_for_key(Keycode::P), InputAction::Pause);
        assert_eq!(action_for_key(Keycode::Q), InputAction::None);
    }

    #[test]
    fn test_window_close_quits() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(process_event(&event), InputAction::Quit);
    }

    #[test]
    fn test_key_up_is_ignored() {
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::W),
            scancode: None,
            keymod: sdl2::keyboard::Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(process_event(&event), InputAction::None);
    }
}
