pub mod state;
pub mod navigation;

pub use state::*;
