//! Form 2290 tax computations.
//!
//! Per-vehicle tax, the tax computation table (per category and grand
//! totals) and the credit for vehicles disposed of during the period.

pub mod aggregate;
pub mod common;
pub mod disposal_credit;
pub mod vehicle_tax;

pub use aggregate::{CategoryAggregator, GrandTotalsReducer};
pub use disposal_credit::{DisposalCreditCalculator, disposal_lookup_key, months_of_use};
pub use vehicle_tax::VehicleTaxCalculator;
