mod core;
mod loading;
mod simulation;

use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::loading::LoadingPlugin;
use crate::simulation::SimulationPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use greenhouse::Simulation;

pub struct MethaneSimPlugin {
    simulation: Simulation,
}

impl MethaneSimPlugin {
    /// `simulation` must come from a validated configuration
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

impl Plugin for MethaneSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().add_plugins((
            EguiPlugin::default(),
            CameraPlugin,
            LoadingPlugin,
            SimulationPlugin::new(self.simulation.clone()),
        ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
