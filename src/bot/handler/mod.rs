// Exported functions
pub use self::general::{action_help, action_start};
pub use self::lessons::{action_callback, action_text_message};

// Submodules
mod constants;
mod general;
mod lessons;
mod utils;
