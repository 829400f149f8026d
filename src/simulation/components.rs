use bevy::prelude::*;
use greenhouse::coupling::Gas;

#[derive(Component)]
pub struct EarthSprite;

#[derive(Component)]
pub struct TemperatureOverlay;

/// One pooled particle mesh, repositioned every frame
#[derive(Component)]
pub struct Particle {
    pub gas: Gas,
}

#[derive(Component)]
pub struct TemperatureLabel;

#[derive(Component)]
pub struct SliderValuesLabel;
