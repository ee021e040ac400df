use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FirstUseMonth;

/// Partial-period rate shown next to a category on the tax computation table.
///
/// Display only. It is the rate for the earliest non-July first-use month in
/// the category; the category's tax sums are computed per vehicle and do not
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeRate {
    pub month: FirstUseMonth,
    pub regular: Decimal,
    pub logging: Decimal,
}

/// One row of the Form 2290 tax computation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub regular_count: u32,
    pub logging_count: u32,

    /// Regular vehicles first used in July.
    pub regular_annual_tax: Decimal,
    /// Regular vehicles first used in any other month.
    pub regular_partial_tax: Decimal,
    pub regular_total_tax: Decimal,

    pub logging_annual_tax: Decimal,
    pub logging_partial_tax: Decimal,
    pub logging_total_tax: Decimal,

    pub representative_partial_rate: Option<RepresentativeRate>,
}

impl CategoryAggregate {
    pub fn vehicle_count(&self) -> u32 {
        self.regular_count + self.logging_count
    }

    pub fn total_tax(&self) -> Decimal {
        self.regular_total_tax + self.logging_total_tax
    }
}

/// Filing-level totals: every [`CategoryAggregate`] summed field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotals {
    pub regular_count: u32,
    pub logging_count: u32,

    pub regular_annual_tax: Decimal,
    pub regular_partial_tax: Decimal,
    pub regular_total_tax: Decimal,

    pub logging_annual_tax: Decimal,
    pub logging_partial_tax: Decimal,
    pub logging_total_tax: Decimal,
}

impl GrandTotals {
    pub fn vehicle_count(&self) -> u32 {
        self.regular_count + self.logging_count
    }

    /// Line 2 of the return: total tax before credits.
    pub fn total_tax(&self) -> Decimal {
        self.regular_total_tax + self.logging_total_tax
    }

    pub(crate) fn accumulate(
        &mut self,
        aggregate: &CategoryAggregate,
    ) {
        self.regular_count += aggregate.regular_count;
        self.logging_count += aggregate.logging_count;
        self.regular_annual_tax += aggregate.regular_annual_tax;
        self.regular_partial_tax += aggregate.regular_partial_tax;
        self.regular_total_tax += aggregate.regular_total_tax;
        self.logging_annual_tax += aggregate.logging_annual_tax;
        self.logging_partial_tax += aggregate.logging_partial_tax;
        self.logging_total_tax += aggregate.logging_total_tax;
    }
}
