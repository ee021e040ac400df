//! The tax computation table: one row per weight category plus totals.
//!
//! Every vehicle lands in exactly one row, chosen by
//! [`Vehicle::effective_category`]. Category `W` therefore collects both
//! vehicles entered as `W` and vehicles forced there by a suspension flag,
//! and its tax columns stay at zero.

use std::collections::BTreeMap;

use tracing::trace;

use crate::calculations::VehicleTaxCalculator;
use crate::models::{CategoryAggregate, GrandTotals, RepresentativeRate, Vehicle, WeightCategory};
use crate::rates::{RateTables, TaxKind};

/// Groups vehicles by category and sums their tax.
#[derive(Debug, Clone, Copy)]
pub struct CategoryAggregator<'a> {
    tables: &'a RateTables,
    calculator: VehicleTaxCalculator<'a>,
}

impl<'a> CategoryAggregator<'a> {
    pub fn new(tables: &'a RateTables) -> Self {
        Self {
            tables,
            calculator: VehicleTaxCalculator::new(tables),
        }
    }

    /// Builds all 23 rows, including empty ones.
    ///
    /// Vehicles with neither a category nor a suspension flag are left out
    /// of every row.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use hvut_core::calculations::CategoryAggregator;
    /// use hvut_core::{RateTables, Vehicle, WeightCategory};
    ///
    /// let vehicles = vec![
    ///     Vehicle {
    ///         vin: "1HGCM82633A004352".to_string(),
    ///         weight_category: Some(WeightCategory::C),
    ///         first_use_month: Some("202507".to_string()),
    ///         ..Default::default()
    ///     },
    ///     Vehicle {
    ///         vin: "1HGCM82633A004353".to_string(),
    ///         weight_category: Some(WeightCategory::C),
    ///         first_use_month: Some("202510".to_string()),
    ///         ..Default::default()
    ///     },
    /// ];
    ///
    /// let rows = CategoryAggregator::new(RateTables::irs()).aggregate(&vehicles);
    /// let c = &rows[&WeightCategory::C];
    ///
    /// assert_eq!(c.regular_count, 2);
    /// assert_eq!(c.regular_annual_tax, dec!(144.00));
    /// assert_eq!(c.regular_partial_tax, dec!(108.00));
    /// assert_eq!(c.regular_total_tax, dec!(252.00));
    /// ```
    pub fn aggregate(
        &self,
        vehicles: &[Vehicle],
    ) -> BTreeMap<WeightCategory, CategoryAggregate> {
        WeightCategory::ALL
            .into_iter()
            .map(|category| (category, self.aggregate_category(category, vehicles)))
            .collect()
    }

    fn aggregate_category(
        &self,
        category: WeightCategory,
        vehicles: &[Vehicle],
    ) -> CategoryAggregate {
        let members: Vec<&Vehicle> = vehicles
            .iter()
            .filter(|v| v.effective_category() == Some(category))
            .collect();

        let mut row = CategoryAggregate::default();
        for vehicle in &members {
            let tax = self.calculator.calculate(vehicle);
            let full_period = vehicle.first_use().is_some_and(|m| m.is_full_period());
            trace!(vin = %vehicle.vin, %category, %tax, full_period, "aggregating vehicle");

            let (count, annual, partial) = match vehicle.tax_kind() {
                TaxKind::Regular => (
                    &mut row.regular_count,
                    &mut row.regular_annual_tax,
                    &mut row.regular_partial_tax,
                ),
                TaxKind::Logging => (
                    &mut row.logging_count,
                    &mut row.logging_annual_tax,
                    &mut row.logging_partial_tax,
                ),
            };
            *count += 1;
            if full_period {
                *annual += tax;
            } else {
                *partial += tax;
            }
        }

        row.regular_total_tax = row.regular_annual_tax + row.regular_partial_tax;
        row.logging_total_tax = row.logging_annual_tax + row.logging_partial_tax;
        row.representative_partial_rate = self.representative_rate(category, &members);
        row
    }

    /// Rate for the earliest partial-period month among `members`.
    ///
    /// Only one month is shown per category even when its vehicles were
    /// first used in several different months.
    fn representative_rate(
        &self,
        category: WeightCategory,
        members: &[&Vehicle],
    ) -> Option<RepresentativeRate> {
        let month = members
            .iter()
            .filter_map(|v| v.first_use())
            .filter(|m| !m.is_full_period())
            .min()?;

        let regular = self
            .tables
            .partial_tax(TaxKind::Regular, category, month.month)?;
        let logging = self
            .tables
            .partial_tax(TaxKind::Logging, category, month.month)?;

        Some(RepresentativeRate {
            month,
            regular,
            logging,
        })
    }
}

/// Sums category rows into filing totals.
pub struct GrandTotalsReducer;

impl GrandTotalsReducer {
    /// Field-wise sum. An empty input gives all-zero totals.
    pub fn reduce<'b, I>(aggregates: I) -> GrandTotals
    where
        I: IntoIterator<Item = &'b CategoryAggregate>,
    {
        aggregates
            .into_iter()
            .fold(GrandTotals::default(), |mut totals, row| {
                totals.accumulate(row);
                totals
            })
    }
}
