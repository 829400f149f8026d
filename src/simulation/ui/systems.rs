use crate::simulation::events::{ResetSimulation, SliderChanged};
use crate::simulation::resources::{CurrentSimulation, SimulationSettings};
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use greenhouse::state::Slider;

/// Controls strip below the canvas
pub fn render_controls_panel(
    mut contexts: EguiContexts,
    settings: Res<SimulationSettings>,
    current: Res<CurrentSimulation>,
    mut slider_events: MessageWriter<SliderChanged>,
    mut reset_events: MessageWriter<ResetSimulation>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let config = settings.simulation.config();
    let total = config.model.total_concentration;
    let step = config.sliders.level_step as f64;
    let sliders = current.state.sliders;

    egui::TopBottomPanel::bottom("controls_panel")
        .exact_height(config.canvas.controls_height)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);

            // gas sliders are coupled, moving one moves the other
            let mut methane = sliders.methane_level;
            if ui
                .add(
                    egui::Slider::new(&mut methane, 0.0..=total)
                        .step_by(step)
                        .text("Methane (%)"),
                )
                .changed()
            {
                slider_events.write(SliderChanged {
                    slider: Slider::Methane,
                    value: methane,
                });
            }

            let mut co2 = sliders.co2_level;
            if ui
                .add(
                    egui::Slider::new(&mut co2, 0.0..=total)
                        .step_by(step)
                        .text("CO₂ (%)"),
                )
                .changed()
            {
                slider_events.write(SliderChanged {
                    slider: Slider::Co2,
                    value: co2,
                });
            }

            let mut particles = sliders.particle_count;
            if ui
                .add(
                    egui::Slider::new(&mut particles, 0..=config.sliders.particle_max)
                        .text("Particles"),
                )
                .changed()
            {
                slider_events.write(SliderChanged {
                    slider: Slider::Particles,
                    value: particles as f32,
                });
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    reset_events.write(ResetSimulation);
                }
                if ui.button("Quit").clicked() {
                    app_exit_events.write(AppExit::Success);
                }
            });
        });
}
