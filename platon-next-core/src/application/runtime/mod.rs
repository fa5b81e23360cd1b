mod activity_loop;
mod command_queue;

pub use activity_loop::ActivityLoop;
pub use command_queue::{CommandQueue, QueueError};
