//! Input state management
//!
//! Polls keyboard, mouse/touch (macroquad) and gamepad input each frame,
//! combining them with the virtual joystick into one action-based API.

use macroquad::prelude::*;

use super::gamepad::{button, Gamepad};
use super::joystick::{StickKeys, VirtualJoystick};
use super::Action;
use crate::game::MoveIntent;
use crate::layout::Layout;

/// Stick tilt that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Where the pointer is this frame, in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Held position (mouse button or first touch)
    pub held: Option<Vec2>,
    /// Position of a press that started this frame
    pub tapped: Option<Vec2>,
}

/// Unified input state that handles keyboard, pointer, joystick and gamepad
pub struct InputState {
    gamepad: Gamepad,
    pub joystick: VirtualJoystick,
    pointer: Pointer,
}

impl InputState {
    pub fn new(layout: &Layout) -> Self {
        Self {
            gamepad: Gamepad::new(),
            joystick: joystick_for(layout),
            pointer: Pointer::default(),
        }
    }

    /// Call once per frame before checking actions. `to_layout` maps window
    /// pixels to layout coordinates.
    pub fn poll(&mut self, to_layout: Vec2) {
        self.gamepad.poll();
        self.pointer = read_pointer(to_layout);
        self.joystick.update(self.pointer.held);
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action) || self.joystick_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Movement for the scene this frame
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
        }
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::Right),
            Action::Jump => is_key_down(KeyCode::Up),
            Action::Warp => is_key_down(KeyCode::Tab),
            Action::Restart => is_key_down(KeyCode::Enter),
            Action::ToggleDebug => is_key_down(KeyCode::F1),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Up),
            Action::Warp => is_key_pressed(KeyCode::Tab),
            Action::Restart => is_key_pressed(KeyCode::Enter),
            Action::ToggleDebug => is_key_pressed(KeyCode::F1),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        let stick = self.gamepad.left_stick();

        match action {
            Action::MoveLeft => {
                self.gamepad.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD
            }
            Action::Jump => {
                self.gamepad.is_button_down(button::A) || self.gamepad.is_button_down(button::DPAD_UP)
            }
            Action::Warp => self.gamepad.is_button_down(button::SELECT),
            Action::Restart => self.gamepad.is_button_down(button::START),
            Action::ToggleDebug => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            Action::Warp => self.gamepad.is_button_pressed(button::SELECT),
            Action::Restart => self.gamepad.is_button_pressed(button::START),
            _ => false,
        }
    }

    fn joystick_down(&self, action: Action) -> bool {
        stick_action(self.joystick.keys(), action)
    }
}

/// Joystick sized and placed for this layout
pub fn joystick_for(layout: &Layout) -> VirtualJoystick {
    let base = Vec2::new(
        layout.screen_width / 2.0,
        layout.screen_height - layout.joystick_size * 1.5,
    );
    VirtualJoystick::new(base, layout.joystick_size)
}

fn stick_action(keys: StickKeys, action: Action) -> bool {
    match action {
        Action::MoveLeft => keys.left,
        Action::MoveRight => keys.right,
        Action::Jump => keys.up,
        _ => false,
    }
}

fn read_pointer(to_layout: Vec2) -> Pointer {
    if let Some(touch) = touches().first() {
        let point = touch.position * to_layout;
        let tapped = (touch.phase == TouchPhase::Started).then_some(point);
        return Pointer { held: Some(point), tapped };
    }

    let point = Vec2::from(mouse_position()) * to_layout;
    Pointer {
        held: is_mouse_button_down(MouseButton::Left).then_some(point),
        tapped: is_mouse_button_pressed(MouseButton::Left).then_some(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joystick_sits_above_the_ground_centre() {
        let layout = Layout::new(800.0, 600.0, 10);
        let js = joystick_for(&layout);
        assert_eq!(js.base.x, 400.0);
        assert!((js.base.y - (600.0 - 100.0 / 3.0 * 1.5)).abs() < 1e-3);
        assert!((js.radius - 100.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_stick_maps_to_movement_only() {
        let keys = StickKeys { left: true, up: true, ..Default::default() };
        assert!(stick_action(keys, Action::MoveLeft));
        assert!(stick_action(keys, Action::Jump));
        assert!(!stick_action(keys, Action::MoveRight));
        assert!(!stick_action(keys, Action::Warp));
    }
}
