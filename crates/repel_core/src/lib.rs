pub mod config;
pub mod constants;
pub mod types;

pub use config::{SimConfig, clamp_particle_count};
pub use constants::*;
pub use types::*;
