use bevy::prelude::*;
use greenhouse::state::Slider;

#[derive(Message)]
pub struct SliderChanged {
    pub slider: Slider,
    pub value: f32,
}

#[derive(Message)]
pub struct ResetSimulation;
