pub mod field;
pub mod pipeline;
pub mod state;
