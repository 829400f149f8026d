// Linear warming model (engine-agnostic)

use crate::constants::{BASE_TEMPERATURE, CO2_IMPACT, METHANE_IMPACT, PARTICLE_IMPACT};

/// Temperature in both display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub celsius: f32,
    pub fahrenheit: f32,
}

impl Temperature {
    pub fn from_celsius(celsius: f32) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
        }
    }
}

/// Warming coefficients of the linear model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureModel {
    pub base_temperature: f32,
    pub methane_impact: f32,
    pub co2_impact: f32,
    pub particle_impact: f32,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self {
            base_temperature: BASE_TEMPERATURE,
            methane_impact: METHANE_IMPACT,
            co2_impact: CO2_IMPACT,
            particle_impact: PARTICLE_IMPACT,
        }
    }
}

impl TemperatureModel {
    /// Calculate the temperature produced by the given input levels
    ///
    /// # Arguments
    /// * `methane_level` - Methane share (0..total concentration)
    /// * `co2_level` - CO₂ share (0..total concentration)
    /// * `particle_count` - Number of particles in the atmosphere
    ///
    /// # Returns
    /// Temperature in Celsius and Fahrenheit
    pub fn compute(&self, methane_level: f32, co2_level: f32, particle_count: u32) -> Temperature {
        let celsius = self.base_temperature
            + methane_level * self.methane_impact
            + co2_level * self.co2_impact
            + particle_count as f32 * self.particle_impact;

        Temperature::from_celsius(celsius)
    }
}

/// Calculate the temperature with the default coefficients
pub fn compute_temperature(methane_level: f32, co2_level: f32, particle_count: u32) -> Temperature {
    TemperatureModel::default().compute(methane_level, co2_level, particle_count)
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}
