// Simulation state threaded through slider updates

use crate::coupling::{Gas, apply_coupling};
use crate::temperature::{Temperature, TemperatureModel};

/// Which control the user moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Methane,
    Co2,
    Particles,
}

impl From<Gas> for Slider {
    fn from(gas: Gas) -> Self {
        match gas {
            Gas::Methane => Slider::Methane,
            Gas::Co2 => Slider::Co2,
        }
    }
}

/// Raw slider values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub methane_level: f32,
    pub co2_level: f32,
    pub particle_count: u32,
}

impl SliderState {
    pub fn level(&self, gas: Gas) -> f32 {
        match gas {
            Gas::Methane => self.methane_level,
            Gas::Co2 => self.co2_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub sliders: SliderState,
    pub temperature: Temperature,
}

impl SimulationState {
    pub fn new(sliders: SliderState, model: &TemperatureModel) -> Self {
        let temperature = model.compute(
            sliders.methane_level,
            sliders.co2_level,
            sliders.particle_count,
        );
        Self {
            sliders,
            temperature,
        }
    }
}

/// Apply a slider change and return the resulting state
///
/// Gas sliders go through the coupling rule so methane and CO₂ keep summing to
/// `total_concentration`. The temperature is recomputed for every change.
pub fn handle_slider_change(
    state: SimulationState,
    model: &TemperatureModel,
    total_concentration: f32,
    slider: Slider,
    value: f32,
) -> SimulationState {
    let mut sliders = state.sliders;

    match slider {
        Slider::Methane => {
            let (methane, co2) =
                apply_coupling(Gas::Methane, value, sliders.co2_level, total_concentration);
            sliders.methane_level = methane;
            sliders.co2_level = co2;
        }
        Slider::Co2 => {
            let (methane, co2) =
                apply_coupling(Gas::Co2, sliders.methane_level, value, total_concentration);
            sliders.methane_level = methane;
            sliders.co2_level = co2;
        }
        Slider::Particles => {
            // saturating cast: NaN and negatives become 0
            sliders.particle_count = value.round() as u32;
        }
    }

    SimulationState::new(sliders, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn initial_state() -> SimulationState {
        SimulationState::new(
            SliderState {
                methane_level: 50.0,
                co2_level: 50.0,
                particle_count: 100,
            },
            &TemperatureModel::default(),
        )
    }

    #[test]
    fn test_new_state_computes_temperature() {
        let state = initial_state();

        assert!((state.temperature.celsius - 17.1).abs() < 1e-4);
    }

    #[rstest]
    #[case(Slider::Methane, 80.0, 80.0, 20.0)]
    #[case(Slider::Co2, 80.0, 20.0, 80.0)]
    #[case(Slider::Methane, 0.0, 0.0, 100.0)]
    #[case(Slider::Co2, 100.0, 0.0, 100.0)]
    fn test_gas_change_is_coupled(
        #[case] slider: Slider,
        #[case] value: f32,
        #[case] expected_methane: f32,
        #[case] expected_co2: f32,
    ) {
        let state =
            handle_slider_change(initial_state(), &TemperatureModel::default(), 100.0, slider, value);

        assert_eq!(state.sliders.methane_level, expected_methane);
        assert_eq!(state.sliders.co2_level, expected_co2);
        assert_eq!(state.sliders.particle_count, 100);
    }

    #[test]
    fn test_gas_change_refreshes_temperature() {
        let model = TemperatureModel::default();

        let state = handle_slider_change(initial_state(), &model, 100.0, Slider::Methane, 100.0);

        assert_eq!(state.temperature, model.compute(100.0, 0.0, 100));
    }

    #[rstest]
    #[case(250.0, 250)]
    #[case(12.6, 13)]
    #[case(-5.0, 0)]
    #[case(f32::NAN, 0)]
    fn test_particle_change(#[case] value: f32, #[case] expected: u32) {
        let model = TemperatureModel::default();

        let state = handle_slider_change(initial_state(), &model, 100.0, Slider::Particles, value);

        assert_eq!(state.sliders.particle_count, expected);
        assert_eq!(state.sliders.methane_level, 50.0);
        assert_eq!(state.temperature, model.compute(50.0, 50.0, expected));
    }

    #[test]
    fn test_sum_invariant_over_a_sequence_of_changes() {
        let model = TemperatureModel::default();
        let changes = [
            (Slider::Methane, 10.0),
            (Slider::Particles, 700.0),
            (Slider::Co2, 35.0),
            (Slider::Co2, 99.0),
            (Slider::Methane, 42.5),
        ];

        let mut state = initial_state();
        for (slider, value) in changes {
            state = handle_slider_change(state, &model, 100.0, slider, value);
            let sum = state.sliders.methane_level + state.sliders.co2_level;
            assert!((sum - 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_input_state_is_untouched() {
        let before = initial_state();

        let _ = handle_slider_change(before, &TemperatureModel::default(), 100.0, Slider::Co2, 10.0);

        assert_eq!(before, initial_state());
    }
}
