use bevy::prelude::*;

/// Marker for the single 2D camera
#[derive(Component)]
pub struct MainCamera;

/// Spawn the 2D camera centered on the window
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, IsDefaultUiCamera, MainCamera));
}

/// Map a window-space position (origin top-left, y down) to world space
/// (origin at the window center, y up).
pub fn window_to_world(pos: [f32; 2], bounds: [f32; 2]) -> Vec2 {
    Vec2::new(pos[0] - bounds[0] * 0.5, bounds[1] * 0.5 - pos[1])
}
