pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod ui;

use crate::core::state::AppState;
use crate::simulation::events::*;
use crate::simulation::resources::*;
use crate::simulation::systems::*;
use crate::simulation::ui::systems::render_controls_panel;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use greenhouse::Simulation;
use greenhouse::tools::seeded_rng;

pub struct SimulationPlugin {
    simulation: Simulation,
}

impl SimulationPlugin {
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let (rng, seed) = seeded_rng(self.simulation.config().particles.seed);
        info!("Particle seed: {}", seed);

        app.add_message::<SliderChanged>()
            .add_message::<ResetSimulation>()
            .insert_resource(CurrentSimulation {
                state: self.simulation.initial_state(),
            })
            .insert_resource(SimulationSettings {
                simulation: self.simulation.clone(),
            })
            .insert_resource(ParticleRng(rng))
            .init_resource::<CurrentFrame>()
            .add_systems(Startup, setup_simulation_assets)
            .add_systems(OnEnter(AppState::Running), spawn_scene)
            .add_systems(
                Update,
                (
                    apply_slider_changes,
                    prepare_frame,
                    draw_earth,
                    draw_overlay,
                    draw_particles,
                    update_hud,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                render_controls_panel.run_if(in_state(AppState::Running)),
            );
    }
}
