//! Credit for a vehicle sold, destroyed or stolen during the tax period.
//!
//! The credit is the tax paid for the full period minus the tax that would
//! have been owed for the months the vehicle was actually used:
//!
//! 1. `full` = annual amount for the vehicle's category and column.
//! 2. `months` = months of use, first-use month through disposal month
//!    inclusive, wrapping past December.
//! 3. `partial` = `full` when `months` is 12, otherwise the partial-period
//!    amount in the column selected by [`disposal_lookup_key`].
//! 4. `credit` = `full - partial`, never negative.
//!
//! # Example
//!
//! A category `C` vehicle first used in July and sold in October was used
//! for four months. Four months of use is priced like a vehicle first used
//! in March, so the credit is $144.00 - $48.00.
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use hvut_core::calculations::DisposalCreditCalculator;
//! use hvut_core::{RateTables, Vehicle, WeightCategory};
//!
//! let vehicle = Vehicle {
//!     vin: "1HGCM82633A004352".to_string(),
//!     weight_category: Some(WeightCategory::C),
//!     first_use_month: Some("202507".to_string()),
//!     disposal_date: NaiveDate::from_ymd_opt(2025, 10, 15),
//!     ..Default::default()
//! };
//!
//! let credit = DisposalCreditCalculator::new(RateTables::irs()).calculate(&vehicle);
//!
//! assert_eq!(credit, dec!(96.00));
//! ```

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{non_negative, round_half_up};
use crate::models::{Vehicle, WeightCategory};
use crate::rates::RateTables;

/// Months of use, inclusive, from `first_use_month` to `disposal_month`.
///
/// Both arguments are calendar month numbers. A disposal month earlier in
/// the calendar than the first-use month is taken to fall in the following
/// year. The result is clamped to `1..=12`.
pub fn months_of_use(
    first_use_month: u32,
    disposal_month: u32,
) -> u32 {
    let months = if disposal_month >= first_use_month {
        disposal_month - first_use_month + 1
    } else {
        12 + disposal_month + 1 - first_use_month
    };
    months.clamp(1, 12)
}

/// Partial-period column used to price `months_of_use` months of use.
///
/// The partial-period tables are indexed by first-use month, and a vehicle
/// first used in month `m` is taxed for the months left until the period
/// ends in June. This table maps a number of months of use to the first-use
/// month with that many months left. It is not the identity: four months of
/// use is priced at the March column, not April.
///
/// Returns `None` for 12 (the full period) and for values outside `1..=11`.
pub fn disposal_lookup_key(months_of_use: u32) -> Option<u32> {
    match months_of_use {
        1 => Some(6),
        2 => Some(5),
        3 => Some(4),
        4 => Some(3),
        5 => Some(2),
        6 => Some(1),
        7 => Some(12),
        8 => Some(11),
        9 => Some(10),
        10 => Some(9),
        11 => Some(8),
        _ => None,
    }
}

/// Computes disposal credits from the rate tables.
#[derive(Debug, Clone, Copy)]
pub struct DisposalCreditCalculator<'a> {
    tables: &'a RateTables,
}

impl<'a> DisposalCreditCalculator<'a> {
    pub fn new(tables: &'a RateTables) -> Self {
        Self { tables }
    }

    /// Credit for `vehicle`. Zero when it has no disposal date, owed no tax,
    /// or its first-use month cannot be read.
    pub fn calculate(
        &self,
        vehicle: &Vehicle,
    ) -> Decimal {
        let Some(disposal_date) = vehicle.disposal_date else {
            return Decimal::ZERO;
        };
        // Every suspension flag resolves to `W`.
        let category = match vehicle.effective_category() {
            Some(WeightCategory::W) | None => return Decimal::ZERO,
            Some(category) => category,
        };
        let Some(first_use) = vehicle.first_use() else {
            debug!(vin = %vehicle.vin, "unreadable first-use month, no disposal credit");
            return Decimal::ZERO;
        };

        let kind = vehicle.tax_kind();
        let full_period_tax = self.tables.annual_for(kind, category);
        let months = months_of_use(first_use.month, disposal_date.month());
        let partial_period_tax = disposal_lookup_key(months)
            .and_then(|key| self.tables.partial_tax(kind, category, key))
            .unwrap_or(full_period_tax);

        debug!(
            vin = %vehicle.vin,
            months,
            %full_period_tax,
            %partial_period_tax,
            "disposal credit"
        );
        round_half_up(non_negative(full_period_tax - partial_period_tax))
    }
}
