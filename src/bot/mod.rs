// bot/mod.rs

// Exported functions
pub use self::dispatcher::run_dispatcher;

// Exported structs and types
pub use self::dispatcher::{BotError, Command, HandlerResult};
pub use self::router::{Lesson, Route};

// Declare submodules
mod content;
mod dispatcher;
mod handler;
mod router;
