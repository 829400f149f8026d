use crate::core::camera::logic::CanvasLayout;
use bevy::prelude::*;
use greenhouse::Simulation;
use greenhouse::frame::FrameDirectives;
use greenhouse::state::SimulationState;
use rand::rngs::StdRng;

/// Validated simulation setup, fixed for the lifetime of the app
#[derive(Resource)]
pub struct SimulationSettings {
    pub simulation: Simulation,
}

impl SimulationSettings {
    pub fn canvas_layout(&self) -> CanvasLayout {
        let canvas = &self.simulation.config().canvas;
        CanvasLayout {
            width: canvas.width,
            height: canvas.height,
            controls_height: canvas.controls_height,
        }
    }
}

/// Slider values and temperature owned by the host loop
#[derive(Resource)]
pub struct CurrentSimulation {
    pub state: SimulationState,
}

#[derive(Resource)]
pub struct ParticleRng(pub StdRng);

/// Directives built for the frame being drawn
#[derive(Resource, Default)]
pub struct CurrentFrame {
    pub directives: Option<FrameDirectives>,
}

/// Shared unit circle mesh and the materials drawn with it
#[derive(Resource)]
pub struct SimulationMeshes {
    pub circle: Handle<Mesh>,
    pub overlay: Handle<ColorMaterial>,
    pub methane: Handle<ColorMaterial>,
    pub co2: Handle<ColorMaterial>,
}
