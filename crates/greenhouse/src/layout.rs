// Canvas geometry: Earth image fit, overlay circle and HUD text

use crate::error::{ConfigError, Result};
use crate::state::SliderState;
use crate::temperature::Temperature;
use glam::Vec2;

/// Validated drawing rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    width: f32,
    height: f32,
}

impl Region {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::invalid(format!(
                "region must have a positive finite size, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Radius of the largest disk centered in the region
    pub fn radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    pub fn contains_in_disk(&self, point: Vec2) -> bool {
        point.distance(self.center()) <= self.radius()
    }
}

/// Where to draw the Earth image, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub center: Vec2,
    pub size: Vec2,
}

/// Scale an image into the centered disk of the canvas keeping its aspect ratio
///
/// # Arguments
/// * `image_size` - Source image size in pixels
/// * `canvas` - Canvas region
/// * `scale` - Fraction of the smaller canvas dimension the image may take
///
/// # Returns
/// `None` when the image has no usable size
pub fn fit_image(image_size: Vec2, canvas: &Region, scale: f32) -> Option<ImagePlacement> {
    if !(image_size.x > 0.0 && image_size.y > 0.0) {
        return None;
    }

    let aspect_ratio = image_size.x / image_size.y;
    let max_diameter = canvas.width().min(canvas.height()) * scale;

    let size = if aspect_ratio > 1.0 {
        // landscape: width limits scaling
        Vec2::new(max_diameter, max_diameter / aspect_ratio)
    } else {
        Vec2::new(max_diameter * aspect_ratio, max_diameter)
    };

    Some(ImagePlacement {
        center: canvas.center(),
        size,
    })
}

/// Red warming disk drawn over the Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayDirective {
    pub center: Vec2,
    pub diameter: f32,
    pub color: [u8; 3],
    /// Alpha in [0, 255]
    pub alpha: f32,
}

pub fn overlay_directive(canvas: &Region, scale: f32, alpha: f32) -> OverlayDirective {
    OverlayDirective {
        center: canvas.center(),
        diameter: canvas.width().min(canvas.height()) * scale,
        color: crate::constants::OVERLAY_COLOR,
        alpha,
    }
}

/// Text shown on top of the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub temperature: String,
    pub slider_values: String,
}

impl HudText {
    pub fn new(temperature: &Temperature, sliders: &SliderState) -> Self {
        Self {
            temperature: format_temperature(temperature),
            slider_values: format_slider_values(sliders),
        }
    }
}

pub fn format_temperature(temperature: &Temperature) -> String {
    format!(
        "Temperature: {:.2}°C / {:.2}°F",
        temperature.celsius, temperature.fahrenheit
    )
}

pub fn format_slider_values(sliders: &SliderState) -> String {
    format!(
        "Methane Level: {}%\nCO₂ Level: {}%\nParticle Count: {}",
        sliders.methane_level, sliders.co2_level, sliders.particle_count
    )
}
