pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default};
pub use wiring::{wire_dependencies, Runtime, WiringError};
