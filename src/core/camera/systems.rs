use crate::core::camera::components::MainCamera;
use bevy::log::info;
use bevy::prelude::{Camera2d, Commands};

/// 2D camera centered on the window, so world origin is the window center
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));

    info!("Camera spawned");
}
