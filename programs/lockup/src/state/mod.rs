pub mod lockup_state;

pub use lockup_state::*;
