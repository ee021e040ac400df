//! Input loaders, configuration and logging set-up for the `hvut-calc` CLI.

pub mod config;
pub mod filing;
pub mod logging;
pub mod vehicle_csv;

pub use config::{AppConfig, ConfigError};
pub use filing::FilingLoadError;
pub use vehicle_csv::VehicleCsvError;
