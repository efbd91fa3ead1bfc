mod parse_components;
mod state;

pub use parse_components::parse_components;
pub use state::State;
