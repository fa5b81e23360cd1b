mod commands;
mod event_loop;
mod events;
pub mod runtime;

pub use commands::NavigationCommand;
pub use event_loop::ActivityEventLoop;
pub use events::ActivityEvent;
