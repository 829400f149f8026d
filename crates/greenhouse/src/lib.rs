pub mod config;
pub mod constants;
pub mod coupling;
pub mod error;
pub mod frame;
pub mod layout;
pub mod overlay;
pub mod particles;
pub mod state;
pub mod temperature;
pub mod tools;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use frame::Simulation;
