//! The full pipeline: per-vehicle tax, the tax computation table, disposal
//! credits and, at submission, validation.
//!
//! [`FilingEngine::compute`] is cheap and pure, so callers re-run it after
//! every edit to the vehicle list. Identical input always produces identical
//! output; every map is ordered.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use hvut_core::{FilingEngine, RateTables, ValidationConfig, Vehicle, WeightCategory};
//!
//! let engine = FilingEngine::new(RateTables::irs(), ValidationConfig::default());
//! let vehicles = vec![Vehicle {
//!     vin: "1HGCM82633A004352".to_string(),
//!     weight_category: Some(WeightCategory::C),
//!     first_use_month: Some("202507".to_string()),
//!     disposal_date: NaiveDate::from_ymd_opt(2025, 10, 1),
//!     disposal_reason: Some("Sold".to_string()),
//!     ..Default::default()
//! }];
//!
//! let computation = engine.compute(&vehicles);
//!
//! assert_eq!(computation.grand_totals.total_tax(), dec!(144.00));
//! assert_eq!(computation.disposal_credits["1HGCM82633A004352"], dec!(96.00));
//! assert_eq!(computation.balance_due(), dec!(48.00));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::calculations::{
    CategoryAggregator, DisposalCreditCalculator, GrandTotalsReducer, VehicleTaxCalculator,
};
use crate::config::ValidationConfig;
use crate::models::{CategoryAggregate, Filing, GrandTotals, Vehicle, WeightCategory};
use crate::rates::RateTables;
use crate::validation::ValidationEngine;

/// Tax and credit for one vehicle, in vehicle-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleResult {
    pub vin: String,
    pub tax: Decimal,
    pub credit: Decimal,
}

/// Everything computed from a vehicle list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingComputation {
    pub category_aggregates: BTreeMap<WeightCategory, CategoryAggregate>,
    pub grand_totals: GrandTotals,
    /// Credit per VIN for every vehicle with a disposal date. Keys are
    /// trimmed and upper-cased, so VINs differing only by case share one entry.
    pub disposal_credits: BTreeMap<String, Decimal>,
    #[serde(skip)]
    pub vehicle_results: Vec<VehicleResult>,
}

impl FilingComputation {
    /// Sum of every vehicle's disposal credit.
    pub fn total_credits(&self) -> Decimal {
        self.vehicle_results.iter().map(|r| r.credit).sum()
    }

    /// Total tax less credits. Negative when credits exceed tax.
    pub fn balance_due(&self) -> Decimal {
        self.grand_totals.total_tax() - self.total_credits()
    }
}

/// Output handed to the payment, document and persistence collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingReport {
    pub category_aggregates: BTreeMap<WeightCategory, CategoryAggregate>,
    pub grand_totals: GrandTotals,
    pub disposal_credits: BTreeMap<String, Decimal>,
    pub balance_due: Decimal,
    /// First broken rule, or `None` when the submission may proceed.
    pub validation_error: Option<String>,
}

impl FilingReport {
    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none()
    }
}

/// Runs the calculators and the validation rules against one set of tables.
#[derive(Debug, Clone)]
pub struct FilingEngine<'a> {
    tables: &'a RateTables,
    config: ValidationConfig,
}

impl<'a> FilingEngine<'a> {
    pub fn new(
        tables: &'a RateTables,
        config: ValidationConfig,
    ) -> Self {
        Self { tables, config }
    }

    pub fn validator(&self) -> ValidationEngine<'_> {
        ValidationEngine::new(&self.config)
    }

    /// Computes the tax computation table and disposal credits.
    pub fn compute(
        &self,
        vehicles: &[Vehicle],
    ) -> FilingComputation {
        let category_aggregates = CategoryAggregator::new(self.tables).aggregate(vehicles);
        let grand_totals = GrandTotalsReducer::reduce(category_aggregates.values());

        let tax_calculator = VehicleTaxCalculator::new(self.tables);
        let credit_calculator = DisposalCreditCalculator::new(self.tables);
        let vehicle_results: Vec<VehicleResult> = vehicles
            .iter()
            .map(|vehicle| VehicleResult {
                vin: vehicle.vin.trim().to_string(),
                tax: tax_calculator.calculate(vehicle),
                credit: credit_calculator.calculate(vehicle),
            })
            .collect();

        let mut disposal_credits = BTreeMap::new();
        for (vehicle, result) in vehicles.iter().zip(&vehicle_results) {
            if vehicle.disposal_date.is_some() {
                *disposal_credits
                    .entry(result.vin.to_ascii_uppercase())
                    .or_insert(Decimal::ZERO) += result.credit;
            }
        }

        debug!(
            vehicles = vehicles.len(),
            total_tax = %grand_totals.total_tax(),
            credits = disposal_credits.len(),
            "computed filing totals"
        );

        FilingComputation {
            category_aggregates,
            grand_totals,
            disposal_credits,
            vehicle_results,
        }
    }

    /// Computes and validates a complete filing.
    pub fn evaluate(
        &self,
        filing: &Filing,
        captcha_token: Option<&str>,
    ) -> FilingReport {
        let computation = self.compute(&filing.vehicles);
        let validation_error = self
            .validator()
            .validate(&filing.filer, &filing.vehicles, &computation, captcha_token)
            .err()
            .map(|e| e.to_string());

        let balance_due = computation.balance_due();
        info!(
            vehicles = filing.vehicles.len(),
            %balance_due,
            valid = validation_error.is_none(),
            "evaluated filing"
        );

        FilingReport {
            category_aggregates: computation.category_aggregates,
            grand_totals: computation.grand_totals,
            disposal_credits: computation.disposal_credits,
            balance_due,
            validation_error,
        }
    }
}
