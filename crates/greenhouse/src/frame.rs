// Per-frame pipeline: temperature -> overlay -> particles -> layout

use crate::config::SimulationConfig;
use crate::constants::{CO2_COLOR, METHANE_COLOR};
use crate::coupling::Gas;
use crate::error::Result;
use crate::layout::{
    HudText, ImagePlacement, OverlayDirective, Region, fit_image, overlay_directive,
};
use crate::overlay::OverlayMapping;
use crate::particles::{ParticlePoint, ParticleSampler};
use crate::state::{SimulationState, Slider, handle_slider_change};
use crate::temperature::TemperatureModel;
use glam::Vec2;
use rand::Rng;

/// Particles of one gas with their draw style
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDirective {
    pub gas: Gas,
    pub points: Vec<ParticlePoint>,
    pub radius: f32,
    pub color: [u8; 3],
    pub alpha: u8,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDirectives {
    /// `None` until the Earth image is available
    pub earth: Option<ImagePlacement>,
    pub overlay: OverlayDirective,
    pub methane: ParticleDirective,
    pub co2: ParticleDirective,
    pub hud: HudText,
}

impl FrameDirectives {
    pub fn particles(&self, gas: Gas) -> &ParticleDirective {
        match gas {
            Gas::Methane => &self.methane,
            Gas::Co2 => &self.co2,
        }
    }
}

/// Validated simulation setup
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    model: TemperatureModel,
    overlay: OverlayMapping,
    sampler: ParticleSampler,
    canvas: Region,
}

impl Simulation {
    /// Validate the configuration and build the model pieces
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let model = config.temperature_model();
        let overlay =
            OverlayMapping::new(config.model.base_temperature, config.model.max_temperature)?;
        let sampler = ParticleSampler::new(
            config.model.total_concentration,
            config.particles.max_sample_attempts,
        )?;
        let canvas = Region::new(config.canvas.width, config.canvas.height)?;

        Ok(Self {
            config,
            model,
            overlay,
            sampler,
            canvas,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn model(&self) -> &TemperatureModel {
        &self.model
    }

    pub fn canvas(&self) -> &Region {
        &self.canvas
    }

    pub fn initial_state(&self) -> SimulationState {
        SimulationState::new(self.config.default_sliders(), &self.model)
    }

    pub fn handle_slider_change(
        &self,
        state: SimulationState,
        slider: Slider,
        value: f32,
    ) -> SimulationState {
        handle_slider_change(
            state,
            &self.model,
            self.config.model.total_concentration,
            slider,
            value,
        )
    }

    pub fn overlay_alpha(&self, state: &SimulationState) -> f32 {
        self.overlay.alpha(state.temperature.celsius)
    }

    /// Build the draw directives for one frame
    ///
    /// # Arguments
    /// * `state` - Current slider values and temperature
    /// * `image_size` - Earth image size, `None` while it is unavailable
    /// * `rng` - Source for the particle positions, consumed every call
    pub fn build_frame<R: Rng>(
        &self,
        state: &SimulationState,
        image_size: Option<Vec2>,
        rng: &mut R,
    ) -> FrameDirectives {
        let scale = self.config.canvas.earth_scale;
        let earth = image_size.and_then(|size| fit_image(size, &self.canvas, scale));
        let overlay = overlay_directive(&self.canvas, scale, self.overlay_alpha(state));

        FrameDirectives {
            earth,
            overlay,
            methane: self.particle_directive(state, Gas::Methane, rng),
            co2: self.particle_directive(state, Gas::Co2, rng),
            hud: HudText::new(&state.temperature, &state.sliders),
        }
    }

    fn particle_directive<R: Rng>(
        &self,
        state: &SimulationState,
        gas: Gas,
        rng: &mut R,
    ) -> ParticleDirective {
        let points = self.sampler.sample(
            rng,
            gas,
            state.sliders.particle_count,
            state.sliders.level(gas),
            &self.canvas,
        );

        ParticleDirective {
            gas,
            points,
            radius: self.config.particles.radius,
            color: match gas {
                Gas::Methane => METHANE_COLOR,
                Gas::Co2 => CO2_COLOR,
            },
            alpha: self.config.particles.alpha,
        }
    }
}
