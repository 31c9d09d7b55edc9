//! Unified gamepad support for native and WASM
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses Web Gamepad API bindings exposed by the page's JS plugin

use macroquad::prelude::Vec2;
use std::cell::Cell;

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const SELECT: u32 = 8;      // Back/Select
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

const DEFAULT_DEADZONE: f32 = 0.15;

// ============================================================================
// WASM Implementation (Web Gamepad API)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    // FFI bindings to JavaScript functions in index.html
    extern "C" {
        fn volcano_gamepad_has_gamepad() -> i32;
        fn volcano_gamepad_get_button_mask() -> u32;
        fn volcano_gamepad_get_left_stick_x() -> i32;
        fn volcano_gamepad_get_left_stick_y() -> i32;
    }

    pub struct Gamepad {
        deadzone: f32,
        last_buttons: Cell<u32>,
        buttons: Cell<u32>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            Self {
                deadzone: DEFAULT_DEADZONE,
                last_buttons: Cell::new(0),
                buttons: Cell::new(0),
            }
        }

        /// Latch this frame's buttons so edge detection works
        pub fn poll(&mut self) {
            self.last_buttons.set(self.buttons.get());
            self.buttons.set(unsafe { volcano_gamepad_get_button_mask() });
        }

        pub fn has_gamepad(&self) -> bool {
            unsafe { volcano_gamepad_has_gamepad() != 0 }
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons.get() & (1 << button)) != 0
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            pressed_edge(self.last_buttons.get(), self.buttons.get(), button)
        }

        pub fn left_stick(&self) -> Vec2 {
            let x = unsafe { volcano_gamepad_get_left_stick_x() } as f32 / 10000.0;
            let y = -(unsafe { volcano_gamepad_get_left_stick_y() } as f32 / 10000.0); // Invert Y
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        last_buttons: Cell<u32>,
        buttons: Cell<u32>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: DEFAULT_DEADZONE,
                last_buttons: Cell::new(0),
                buttons: Cell::new(0),
            }
        }

        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                // Events are processed internally by gilrs
                while gilrs.next_event().is_some() {}
            }
            self.last_buttons.set(self.buttons.get());
            self.buttons.set(self.get_button_mask());
        }

        pub fn has_gamepad(&self) -> bool {
            self.get_active_gamepad().is_some()
        }

        fn get_active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn get_button_mask(&self) -> u32 {
            let Some(gp) = self.get_active_gamepad() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
            if gp.is_pressed(GilrsButton::Select) { mask |= 1 << button::SELECT; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons.get() & (1 << button)) != 0
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            pressed_edge(self.last_buttons.get(), self.buttons.get(), button)
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.get_active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY); // Invert Y to match Web API
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Button went down between the last two polls
fn pressed_edge(last: u32, current: u32, button: u32) -> bool {
    let bit = 1 << button;
    (current & bit) != 0 && (last & bit) == 0
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_swallows_drift() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales_full_tilt() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-5);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_pressed_edge() {
        let a = 1 << button::A;
        assert!(pressed_edge(0, a, button::A));
        assert!(!pressed_edge(a, a, button::A));
        assert!(!pressed_edge(a, 0, button::A));
    }
}
