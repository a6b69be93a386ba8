// src/engine_lib/controller.rs

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::engine_lib::player::MoveInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Quit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Forward,
        Action::Back,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Quit,
    ];

    pub fn from_key_code(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::KeyW => Some(Action::Forward),
            KeyCode::KeyS => Some(Action::Back),
            KeyCode::KeyA => Some(Action::StrafeLeft),
            KeyCode::KeyD => Some(Action::StrafeRight),
            KeyCode::KeyQ => Some(Action::TurnLeft),
            KeyCode::KeyE => Some(Action::TurnRight),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(Action::Quit),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of currently held actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.0 |= action.bit();
        } else {
            self.0 &= !action.bit();
        }
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    /// `+1` when only `positive` is held, `-1` when only `negative` is, else `0`.
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        self.contains(positive) as i8 as f32 - self.contains(negative) as i8 as f32
    }
}

#[derive(Debug, Default)]
pub struct PlayerController {
    held: ActionSet,
    quit_requested: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => match key_event.physical_key {
                PhysicalKey::Code(code) => {
                    self.handle_key(code, key_event.state == ElementState::Pressed)
                }
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused.
                self.held = ActionSet::default();
                false
            }
            _ => false,
        }
    }

    /// Returns whether the key was bound to an action.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        let Some(action) = Action::from_key_code(code) else {
            return false;
        };
        if action == Action::Quit {
            if pressed && !self.quit_requested {
                log::debug!("quit requested");
                self.quit_requested = true;
            }
            return true;
        }
        self.held.set(action, pressed);
        true
    }

    pub fn held(&self) -> ActionSet {
        self.held
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn move_input(&self) -> MoveInput {
        MoveInput {
            forward: self.held.axis(Action::Forward, Action::Back),
            strafe: self.held.axis(Action::StrafeRight, Action::StrafeLeft),
            turn: self.held.axis(Action::TurnRight, Action::TurnLeft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        assert_eq!(Action::from_key_code(KeyCode::KeyW), Some(Action::Forward));
        assert_eq!(Action::from_key_code(KeyCode::KeyA), Some(Action::StrafeLeft));
        assert_eq!(Action::from_key_code(KeyCode::KeyE), Some(Action::TurnRight));
        assert_eq!(Action::from_key_code(KeyCode::Enter), Some(Action::Quit));
        assert_eq!(Action::from_key_code(KeyCode::KeyX), None);
    }

    #[test]
    fn action_bits_are_distinct() {
        let mut set = ActionSet::default();
        for action in Action::ALL {
            set.set(action, true);
        }
        assert_eq!(set.iter().count(), Action::ALL.len());
        set.set(Action::Back, false);
        assert!(!set.contains(Action::Back));
        assert!(set.contains(Action::Forward));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut ctl = PlayerController::new();
        ctl.handle_key(KeyCode::KeyW, true);
        ctl.handle_key(KeyCode::KeyS, true);
        assert_eq!(ctl.move_input().forward, 0.0);
        ctl.handle_key(KeyCode::KeyW, false);
        assert_eq!(ctl.move_input().forward, -1.0);
    }

    #[test]
    fn axes_follow_held_keys() {
        let mut ctl = PlayerController::new();
        ctl.handle_key(KeyCode::KeyD, true);
        ctl.handle_key(KeyCode::KeyQ, true);
        assert_eq!(ctl.move_input(), MoveInput::new(0.0, 1.0, -1.0));
        ctl.handle_key(KeyCode::KeyD, false);
        ctl.handle_key(KeyCode::KeyQ, false);
        assert!(ctl.move_input().is_idle());
        assert!(ctl.held().is_empty());
    }

    #[test]
    fn enter_requests_quit() {
        let mut ctl = PlayerController::new();
        assert!(!ctl.handle_key(KeyCode::KeyZ, true));
        assert!(!ctl.quit_requested());
        assert!(ctl.handle_key(KeyCode::Enter, true));
        assert!(ctl.quit_requested());
        // Other keys afterwards do not cancel it.
        ctl.handle_key(KeyCode::KeyW, true);
        assert!(ctl.quit_requested());
        assert!(!ctl.held().contains(Action::Quit));
    }
}
