pub mod error;
pub mod observability;
pub mod state_store;

pub use error::{CliError, Result};
pub use observability::LogConfig;
pub use state_store::StateStore;
