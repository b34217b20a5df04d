pub mod form_state;
pub mod selection_state;

pub use form_state::*;
pub use selection_state::*;
