// Methane and CO₂ always share the same total concentration

/// Gas tracked by the coupled sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gas {
    Methane,
    Co2,
}

impl Gas {
    pub const ALL: [Gas; 2] = [Gas::Methane, Gas::Co2];

    pub fn label(self) -> &'static str {
        match self {
            Gas::Methane => "Methane",
            Gas::Co2 => "CO₂",
        }
    }
}

/// Adjust the untouched level so both levels sum to `total_concentration`
///
/// The level that was changed is returned as is. No clamping happens here:
/// a changed level above `total_concentration` drives the other one negative,
/// so the slider widget has to keep its value within bounds.
///
/// # Returns
/// `(methane_level, co2_level)`
pub fn apply_coupling(
    changed: Gas,
    methane_level: f32,
    co2_level: f32,
    total_concentration: f32,
) -> (f32, f32) {
    match changed {
        Gas::Methane => (methane_level, total_concentration - methane_level),
        Gas::Co2 => (total_concentration - co2_level, co2_level),
    }
}
