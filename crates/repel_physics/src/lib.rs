pub mod bounds;
pub mod collision;
pub mod forces;
pub mod particle;
pub mod step;
pub mod thermodynamics;

pub use step::step;
