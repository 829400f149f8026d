// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use greenhouse::config::DEFAULT_CONFIG_PATH;
use greenhouse::{ConfigError, Simulation, SimulationConfig};
use methane_sim::MethaneSimPlugin;

fn main() -> Result<(), ConfigError> {
    // bad configuration stops here, before any window opens
    let config = SimulationConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    let simulation = Simulation::new(config)?;
    let (width, height) = simulation.config().window_size();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Methane Simulation".into(),
                resolution: WindowResolution::new(width as u32, height as u32),
                present_mode: PresentMode::AutoVsync,
                // the canvas layout assumes a fixed window
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MethaneSimPlugin::new(simulation))
        .run();

    Ok(())
}
