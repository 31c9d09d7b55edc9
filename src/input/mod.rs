//! Input handling with gamepad and touch support
//!
//! Provides an action-based input system that merges keyboard, gamepad,
//! mouse/touch and an on-screen joystick.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses Web Gamepad API bindings from the page's JS plugin

mod actions;
mod buttons;
mod gamepad;
mod joystick;
mod state;

pub use actions::*;
pub use buttons::ScreenButton;
pub use joystick::VirtualJoystick;
pub use state::*;
