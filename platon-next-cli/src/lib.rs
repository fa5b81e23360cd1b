pub mod application;
pub mod infrastructure;

pub use application::{ActivityRunner, ActivityStatus};
pub use infrastructure::{CliError, LogConfig, Result, StateStore};
