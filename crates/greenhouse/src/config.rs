use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::state::SliderState;
use crate::temperature::TemperatureModel;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "methane_sim_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub model: ModelConfig,
    pub sliders: SliderConfig,
    pub particles: ParticleConfig,
    pub canvas: CanvasConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub base_temperature: f32,
    /// Temperature at which the overlay becomes fully opaque
    pub max_temperature: f32,
    pub methane_impact: f32,
    pub co2_impact: f32,
    pub particle_impact: f32,
    pub total_concentration: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub methane_default: f32,
    pub co2_default: f32,
    pub particle_default: u32,
    pub particle_max: u32,
    pub level_step: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    pub radius: f32,
    pub alpha: u8,
    pub max_sample_attempts: u32,
    /// Fixed RNG seed, random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    /// Height of the controls strip below the canvas
    pub controls_height: f32,
    /// Fraction of the smaller canvas side covered by the Earth and overlay
    pub earth_scale: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                base_temperature: BASE_TEMPERATURE,
                max_temperature: MAX_TEMPERATURE,
                methane_impact: METHANE_IMPACT,
                co2_impact: CO2_IMPACT,
                particle_impact: PARTICLE_IMPACT,
                total_concentration: TOTAL_CONCENTRATION,
            },
            sliders: SliderConfig {
                methane_default: TOTAL_CONCENTRATION / 2.0,
                co2_default: TOTAL_CONCENTRATION / 2.0,
                particle_default: 100,
                particle_max: 1000,
                level_step: 1.0,
            },
            particles: ParticleConfig {
                radius: PARTICLE_RADIUS,
                alpha: PARTICLE_ALPHA,
                max_sample_attempts: MAX_SAMPLE_ATTEMPTS,
                seed: None,
            },
            canvas: CanvasConfig {
                width: 600.0,
                height: 400.0,
                controls_height: 150.0,
                earth_scale: EARTH_SCALE,
            },
        }
    }
}

impl SimulationConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SimulationConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn temperature_model(&self) -> TemperatureModel {
        TemperatureModel {
            base_temperature: self.model.base_temperature,
            methane_impact: self.model.methane_impact,
            co2_impact: self.model.co2_impact,
            particle_impact: self.model.particle_impact,
        }
    }

    pub fn default_sliders(&self) -> SliderState {
        SliderState {
            methane_level: self.sliders.methane_default,
            co2_level: self.sliders.co2_default,
            particle_count: self.sliders.particle_default,
        }
    }

    /// Window size: the canvas plus the controls strip
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.canvas.width,
            self.canvas.height + self.canvas.controls_height,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let model = &self.model;
        let sliders = &self.sliders;
        let particles = &self.particles;
        let canvas = &self.canvas;

        let numbers = [
            ("model.base_temperature", model.base_temperature),
            ("model.max_temperature", model.max_temperature),
            ("model.methane_impact", model.methane_impact),
            ("model.co2_impact", model.co2_impact),
            ("model.particle_impact", model.particle_impact),
            ("model.total_concentration", model.total_concentration),
            ("sliders.methane_default", sliders.methane_default),
            ("sliders.co2_default", sliders.co2_default),
            ("sliders.level_step", sliders.level_step),
            ("particles.radius", particles.radius),
            ("canvas.width", canvas.width),
            ("canvas.height", canvas.height),
            ("canvas.controls_height", canvas.controls_height),
            ("canvas.earth_scale", canvas.earth_scale),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::invalid(format!("{} must be finite, got {}", name, value)));
        }

        if model.total_concentration <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "model.total_concentration must be positive, got {}",
                model.total_concentration
            )));
        }
        if model.max_temperature <= model.base_temperature {
            return Err(ConfigError::invalid(format!(
                "model.max_temperature ({}) must be greater than model.base_temperature ({})",
                model.max_temperature, model.base_temperature
            )));
        }

        let level_range = 0.0..=model.total_concentration;
        if !level_range.contains(&sliders.methane_default)
            || !level_range.contains(&sliders.co2_default)
        {
            return Err(ConfigError::invalid(format!(
                "default gas levels must lie in [0, {}]",
                model.total_concentration
            )));
        }
        if (sliders.methane_default + sliders.co2_default - model.total_concentration).abs() > 1e-3 {
            return Err(ConfigError::invalid(format!(
                "default methane ({}) and CO2 ({}) levels must sum to {}",
                sliders.methane_default, sliders.co2_default, model.total_concentration
            )));
        }
        if sliders.particle_default > sliders.particle_max {
            return Err(ConfigError::invalid(format!(
                "sliders.particle_default ({}) exceeds sliders.particle_max ({})",
                sliders.particle_default, sliders.particle_max
            )));
        }
        if sliders.level_step <= 0.0 {
            return Err(ConfigError::invalid("sliders.level_step must be positive"));
        }

        if particles.radius <= 0.0 {
            return Err(ConfigError::invalid("particles.radius must be positive"));
        }
        if particles.max_sample_attempts == 0 {
            return Err(ConfigError::invalid("particles.max_sample_attempts must be at least 1"));
        }

        if canvas.width <= 0.0 || canvas.height <= 0.0 || canvas.controls_height < 0.0 {
            return Err(ConfigError::invalid(format!(
                "canvas size must be positive, got {}x{} with {} controls",
                canvas.width, canvas.height, canvas.controls_height
            )));
        }
        if !(canvas.earth_scale > 0.0 && canvas.earth_scale <= 1.0) {
            return Err(ConfigError::invalid(format!(
                "canvas.earth_scale must lie in (0, 1], got {}",
                canvas.earth_scale
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_sliders_sum_to_total() {
        let config = SimulationConfig::default();
        let sliders = config.default_sliders();

        assert_eq!(
            sliders.methane_level + sliders.co2_level,
            config.model.total_concentration
        );
    }

    #[test]
    fn test_window_includes_controls() {
        assert_eq!(SimulationConfig::default().window_size(), (600.0, 550.0));
    }

    fn assert_invalid(config: SimulationConfig) {
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_total_concentration_is_invalid() {
        let mut config = SimulationConfig::default();
        config.model.total_concentration = 0.0;
        config.sliders.methane_default = 0.0;
        config.sliders.co2_default = 0.0;

        assert_invalid(config);
    }

    #[test]
    fn test_empty_temperature_range_is_invalid() {
        let mut config = SimulationConfig::default();
        config.model.max_temperature = config.model.base_temperature;

        assert_invalid(config);
    }

    #[test]
    fn test_uncoupled_defaults_are_invalid() {
        let mut config = SimulationConfig::default();
        config.sliders.methane_default = 70.0;

        assert_invalid(config);
    }

    #[test]
    fn test_particle_default_above_max_is_invalid() {
        let mut config = SimulationConfig::default();
        config.sliders.particle_default = config.sliders.particle_max + 1;

        assert_invalid(config);
    }

    #[test]
    fn test_non_finite_value_is_invalid() {
        let mut config = SimulationConfig::default();
        config.model.methane_impact = f32::NAN;

        assert_invalid(config);
    }

    #[test]
    fn test_earth_scale_out_of_range_is_invalid() {
        let mut config = SimulationConfig::default();
        config.canvas.earth_scale = 1.5;

        assert_invalid(config);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = SimulationConfig::default();
        config.sliders.particle_default = 321;
        config.particles.seed = Some(7);

        config.save_to_file(&path).unwrap();
        let loaded = SimulationConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = SimulationConfig::default();
        config.model.max_temperature = 0.0;
        config.save_to_file(&path).unwrap();

        let result = SimulationConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = 3").unwrap();

        let result = SimulationConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = SimulationConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, SimulationConfig::default());
    }
}
