// Temperature to overlay opacity mapping

use crate::error::{ConfigError, Result};

/// Normalizes temperature between a base and a maximum into an alpha value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMapping {
    base_temperature: f32,
    max_temperature: f32,
}

impl OverlayMapping {
    /// Fails unless `max_temperature > base_temperature` and both are finite
    pub fn new(base_temperature: f32, max_temperature: f32) -> Result<Self> {
        if !base_temperature.is_finite() || !max_temperature.is_finite() {
            return Err(ConfigError::invalid(format!(
                "overlay temperature range must be finite (base {}, max {})",
                base_temperature, max_temperature
            )));
        }
        if max_temperature <= base_temperature {
            return Err(ConfigError::invalid(format!(
                "max temperature {} must be greater than base temperature {}",
                max_temperature, base_temperature
            )));
        }

        Ok(Self {
            base_temperature,
            max_temperature,
        })
    }

    /// Warming intensity in [0, 1]
    pub fn normalized(&self, temperature_c: f32) -> f32 {
        let span = self.max_temperature - self.base_temperature;
        ((temperature_c - self.base_temperature) / span).clamp(0.0, 1.0)
    }

    /// Overlay alpha in [0, 255]
    pub fn alpha(&self, temperature_c: f32) -> f32 {
        self.normalized(temperature_c) * 255.0
    }
}

/// Calculate the overlay alpha for a temperature
///
/// # Arguments
/// * `temperature_c` - Current temperature in Celsius
/// * `base_temperature` - Temperature at which the overlay is fully transparent
/// * `max_temperature` - Temperature at which the overlay is fully opaque
///
/// # Returns
/// Alpha in [0, 255], or `InvalidConfiguration` for an empty temperature range
pub fn compute_overlay_alpha(
    temperature_c: f32,
    base_temperature: f32,
    max_temperature: f32,
) -> Result<f32> {
    Ok(OverlayMapping::new(base_temperature, max_temperature)?.alpha(temperature_c))
}
