//! Tax owed for a single vehicle.
//!
//! | Vehicle                                    | Tax                          |
//! |--------------------------------------------|------------------------------|
//! | Suspended, agricultural or mileage limited | 0 (reported in category `W`) |
//! | First used in July                         | Annual amount                |
//! | First used in any other month              | Partial-period table amount  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hvut_core::calculations::VehicleTaxCalculator;
//! use hvut_core::{RateTables, Vehicle, WeightCategory};
//!
//! let calculator = VehicleTaxCalculator::new(RateTables::irs());
//! let vehicle = Vehicle {
//!     vin: "1HGCM82633A004352".to_string(),
//!     weight_category: Some(WeightCategory::C),
//!     first_use_month: Some("202507".to_string()),
//!     ..Default::default()
//! };
//!
//! assert_eq!(calculator.calculate(&vehicle), dec!(144.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::models::{Vehicle, WeightCategory};
use crate::rates::RateTables;

/// Computes the tax for one vehicle from the rate tables.
#[derive(Debug, Clone, Copy)]
pub struct VehicleTaxCalculator<'a> {
    tables: &'a RateTables,
}

impl<'a> VehicleTaxCalculator<'a> {
    pub fn new(tables: &'a RateTables) -> Self {
        Self { tables }
    }

    /// Tax owed for `vehicle`, rounded to cents. Never negative.
    ///
    /// A missing category or an unreadable first-use month yields zero
    /// rather than an error; the validation rules report missing fields.
    pub fn calculate(
        &self,
        vehicle: &Vehicle,
    ) -> Decimal {
        let category = match vehicle.effective_category() {
            Some(WeightCategory::W) => return Decimal::ZERO,
            Some(category) => category,
            None => {
                debug!(vin = %vehicle.vin, "no weight category, taxing as zero");
                return Decimal::ZERO;
            }
        };

        let Some(first_use) = vehicle.first_use() else {
            debug!(
                vin = %vehicle.vin,
                first_use_month = ?vehicle.first_use_month,
                "unreadable first-use month, taxing as zero"
            );
            return Decimal::ZERO;
        };

        let kind = vehicle.tax_kind();
        let tax = if first_use.is_full_period() {
            self.tables.annual_for(kind, category)
        } else {
            self.tables
                .partial_tax(kind, category, first_use.month)
                .unwrap_or(Decimal::ZERO)
        };

        round_half_up(tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn vehicle(
        category: WeightCategory,
        month: &str,
    ) -> Vehicle {
        Vehicle {
            vin: "1HGCM82633A004352".to_string(),
            weight_category: Some(category),
            first_use_month: Some(month.to_string()),
            ..Default::default()
        }
    }

    fn calculator() -> VehicleTaxCalculator<'static> {
        VehicleTaxCalculator::new(RateTables::irs())
    }

    // =========================================================================
    // annual and partial-period amounts
    // =========================================================================

    #[test]
    fn july_uses_annual_regular_rate() {
        let result = calculator().calculate(&vehicle(WeightCategory::C, "202507"));

        assert_eq!(result, dec!(144.00));
    }

    #[test]
    fn july_uses_annual_logging_rate() {
        let mut v = vehicle(WeightCategory::C, "202507");
        v.is_logging = true;

        let result = calculator().calculate(&v);

        assert_eq!(result, dec!(108.00));
    }

    #[test]
    fn later_month_uses_partial_table() {
        let result = calculator().calculate(&vehicle(WeightCategory::C, "202510"));

        assert_eq!(result, dec!(108.00));
    }

    #[test]
    fn partial_logging_uses_logging_table() {
        let mut v = vehicle(WeightCategory::B, "202508");
        v.is_logging = true;

        let result = calculator().calculate(&v);

        assert_eq!(result, dec!(83.88));
    }

    #[test]
    fn january_of_following_year_is_half_period() {
        let result = calculator().calculate(&vehicle(WeightCategory::V, "202601"));

        assert_eq!(result, dec!(275.00));
    }

    // =========================================================================
    // zero-tax paths
    // =========================================================================

    #[test]
    fn suspension_flags_zero_the_tax() {
        for flag in 0..3 {
            let mut v = vehicle(WeightCategory::V, "202507");
            match flag {
                0 => v.is_suspended = true,
                1 => v.is_agricultural = true,
                _ => v.mileage_limited = true,
            }

            assert_eq!(calculator().calculate(&v), Decimal::ZERO);
        }
    }

    #[test]
    fn explicit_category_w_is_zero() {
        let result = calculator().calculate(&vehicle(WeightCategory::W, "202507"));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn unreadable_month_degrades_to_zero() {
        let result = calculator().calculate(&vehicle(WeightCategory::C, "July"));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn missing_month_degrades_to_zero() {
        let mut v = vehicle(WeightCategory::C, "202507");
        v.first_use_month = None;

        assert_eq!(calculator().calculate(&v), Decimal::ZERO);
    }

    #[test]
    fn missing_category_is_zero() {
        let mut v = vehicle(WeightCategory::C, "202507");
        v.weight_category = None;

        assert_eq!(calculator().calculate(&v), Decimal::ZERO);
    }
}
