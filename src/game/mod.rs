//! Game Foundation Module
//!
//! A lightweight ECS-inspired layer for a side-scrolling arcade platformer.
//!
//! Key concepts:
//! - Entity: Generational index for safe entity references
//! - Component: Plain data structs attached to entities
//! - World: Container for all entities and their components
//! - Event: Contacts and sound cues passed between systems
//! - Runtime: The scene itself, driven one frame at a time
//!
//! Design philosophy:
//! - Simple over flexible (we know what game we're making)
//! - Game logic never touches the window, so it runs headless in tests
//! - No runtime type registration (compile-time known components)

pub mod entity;
pub mod component;
pub mod components;
pub mod world;
pub mod event;
pub mod physics;
pub mod animation;
pub mod spawn;
pub mod scoreboard;
pub mod tint;
pub mod camera;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use components::{SpriteKey, SpriteSizes};
pub use event::SoundCue;
pub use runtime::{Game, MoveIntent};
pub use spawn::SceneEnv;
pub use renderer::{draw_game, view_scale, HudButtons};
