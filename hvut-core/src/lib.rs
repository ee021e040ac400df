pub mod calculations;
pub mod config;
pub mod engine;
pub mod models;
pub mod rates;
pub mod validation;

pub use config::{Environment, ValidationConfig};
pub use engine::{FilingComputation, FilingEngine, FilingReport, VehicleResult};
pub use models::*;
pub use rates::{RateTables, TaxKind};
pub use validation::{ValidationEngine, ValidationError};
