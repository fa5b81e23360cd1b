pub mod runner;

pub use runner::{parse_params, ActivityRunner, ActivityStatus};
