pub const BASE_TEMPERATURE: f32 = 15.0;
pub const MAX_TEMPERATURE: f32 = 50.0;

// °C per unit of methane, CO₂ and per particle
pub const METHANE_IMPACT: f32 = 0.03;
pub const CO2_IMPACT: f32 = 0.01;
pub const PARTICLE_IMPACT: f32 = 0.001;

pub const TOTAL_CONCENTRATION: f32 = 100.0;

pub const EARTH_SCALE: f32 = 0.75;

pub const PARTICLE_RADIUS: f32 = 2.5;
pub const PARTICLE_ALPHA: u8 = 150;
pub const MAX_SAMPLE_ATTEMPTS: u32 = 1000;

pub const METHANE_COLOR: [u8; 3] = [0, 255, 0]; // green
pub const CO2_COLOR: [u8; 3] = [255, 0, 0]; // red
pub const OVERLAY_COLOR: [u8; 3] = [255, 0, 0]; // red
