//! Game action definitions

/// Everything the player can ask the game to do
///
/// Default bindings:
/// - Arrows / D-pad / left stick / joystick = move and jump
/// - A/Cross = Jump
/// - Tab / Select = Warp to the other half of the world
/// - Enter / Start = Restart (after game over)
/// - F1 = Toggle body outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,

    Warp,
    Restart,

    ToggleDebug,
}
