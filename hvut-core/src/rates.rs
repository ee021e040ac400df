//! Form 2290 tax tables.
//!
//! The amounts below are the IRS-published values for the tax period that
//! begins July 1. They are transcribed verbatim from the form's tax
//! computation table and the partial-period tax tables in the instructions
//! and must not be replaced by a formula.
//!
//! Partial-period columns run in tax-period order, August through June. A
//! vehicle first used in July always owes the annual amount, so July has no
//! column.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hvut_core::{RateTables, TaxKind, WeightCategory};
//!
//! let tables = RateTables::irs();
//!
//! assert_eq!(tables.annual_tax(WeightCategory::C), dec!(144.00));
//! assert_eq!(tables.partial_tax(TaxKind::Regular, WeightCategory::C, 10), Some(dec!(108.00)));
//! assert_eq!(tables.partial_tax(TaxKind::Regular, WeightCategory::C, 7), None);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::WeightCategory;

/// Which rate column applies to a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    Regular,
    /// Vehicles used exclusively to transport forest products.
    Logging,
}

/// Read-only annual and partial-period rates for categories `A` through `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTables {
    annual_regular: [Decimal; 22],
    annual_logging: [Decimal; 22],
    partial_regular: [[Decimal; 11]; 22],
    partial_logging: [[Decimal; 11]; 22],
}

static IRS_TABLES: RateTables = RateTables {
    annual_regular: ANNUAL_REGULAR,
    annual_logging: ANNUAL_LOGGING,
    partial_regular: PARTIAL_REGULAR,
    partial_logging: PARTIAL_LOGGING,
};

impl RateTables {
    /// The published tables. Shared by every caller in the process.
    pub fn irs() -> &'static RateTables {
        &IRS_TABLES
    }

    /// Annual tax for a regular vehicle. Zero for `W`.
    pub fn annual_tax(
        &self,
        category: WeightCategory,
    ) -> Decimal {
        category
            .table_index()
            .map_or(Decimal::ZERO, |i| self.annual_regular[i])
    }

    /// Annual tax for a logging vehicle. Zero for `W`.
    pub fn annual_logging_tax(
        &self,
        category: WeightCategory,
    ) -> Decimal {
        category
            .table_index()
            .map_or(Decimal::ZERO, |i| self.annual_logging[i])
    }

    /// Annual tax for the given column.
    pub fn annual_for(
        &self,
        kind: TaxKind,
        category: WeightCategory,
    ) -> Decimal {
        match kind {
            TaxKind::Regular => self.annual_tax(category),
            TaxKind::Logging => self.annual_logging_tax(category),
        }
    }

    /// Partial-period tax for a vehicle first used in calendar `month`.
    ///
    /// Returns `None` for July (the annual amount applies), for a month
    /// outside `1..=12`, and for category `W`.
    pub fn partial_tax(
        &self,
        kind: TaxKind,
        category: WeightCategory,
        month: u32,
    ) -> Option<Decimal> {
        let row = category.table_index()?;
        let column = partial_column(month)?;
        let table = match kind {
            TaxKind::Regular => &self.partial_regular,
            TaxKind::Logging => &self.partial_logging,
        };
        Some(table[row][column])
    }
}

/// Maps a calendar month to its partial-period column (August = 0 … June = 10).
fn partial_column(month: u32) -> Option<usize> {
    match month {
        8..=12 => Some((month - 8) as usize),
        1..=6 => Some((month + 4) as usize),
        _ => None,
    }
}

const ANNUAL_REGULAR: [Decimal; 22] = [
    dec!(100.00), // A
    dec!(122.00), // B
    dec!(144.00), // C
    dec!(166.00), // D
    dec!(188.00), // E
    dec!(210.00), // F
    dec!(232.00), // G
    dec!(254.00), // H
    dec!(276.00), // I
    dec!(298.00), // J
    dec!(320.00), // K
    dec!(342.00), // L
    dec!(364.00), // M
    dec!(386.00), // N
    dec!(408.00), // O
    dec!(430.00), // P
    dec!(452.00), // Q
    dec!(474.00), // R
    dec!(496.00), // S
    dec!(518.00), // T
    dec!(540.00), // U
    dec!(550.00), // V
];

const ANNUAL_LOGGING: [Decimal; 22] = [
    dec!(75.00), // A
    dec!(91.50), // B
    dec!(108.00), // C
    dec!(124.50), // D
    dec!(141.00), // E
    dec!(157.50), // F
    dec!(174.00), // G
    dec!(190.50), // H
    dec!(207.00), // I
    dec!(223.50), // J
    dec!(240.00), // K
    dec!(256.50), // L
    dec!(273.00), // M
    dec!(289.50), // N
    dec!(306.00), // O
    dec!(322.50), // P
    dec!(339.00), // Q
    dec!(355.50), // R
    dec!(372.00), // S
    dec!(388.50), // T
    dec!(405.00), // U
    dec!(412.50), // V
];

#[rustfmt::skip]
const PARTIAL_REGULAR: [[Decimal; 11]; 22] = [
    //       Aug           Sep           Oct           Nov           Dec           Jan           Feb           Mar           Apr           May           Jun
    /* A */ [dec!(91.67),  dec!(83.33),  dec!(75.00),  dec!(66.67),  dec!(58.33),  dec!(50.00),  dec!(41.67),  dec!(33.33),  dec!(25.00),  dec!(16.67),  dec!(8.33)],
    /* B */ [dec!(111.83), dec!(101.67), dec!(91.50),  dec!(81.33),  dec!(71.17),  dec!(61.00),  dec!(50.83),  dec!(40.67),  dec!(30.50),  dec!(20.33),  dec!(10.17)],
    /* C */ [dec!(132.00), dec!(120.00), dec!(108.00), dec!(96.00),  dec!(84.00),  dec!(72.00),  dec!(60.00),  dec!(48.00),  dec!(36.00),  dec!(24.00),  dec!(12.00)],
    /* D */ [dec!(152.17), dec!(138.33), dec!(124.50), dec!(110.67), dec!(96.83),  dec!(83.00),  dec!(69.17),  dec!(55.33),  dec!(41.50),  dec!(27.67),  dec!(13.83)],
    /* E */ [dec!(172.33), dec!(156.67), dec!(141.00), dec!(125.33), dec!(109.67), dec!(94.00),  dec!(78.33),  dec!(62.67),  dec!(47.00),  dec!(31.33),  dec!(15.67)],
    /* F */ [dec!(192.50), dec!(175.00), dec!(157.50), dec!(140.00), dec!(122.50), dec!(105.00), dec!(87.50),  dec!(70.00),  dec!(52.50),  dec!(35.00),  dec!(17.50)],
    /* G */ [dec!(212.67), dec!(193.33), dec!(174.00), dec!(154.67), dec!(135.33), dec!(116.00), dec!(96.67),  dec!(77.33),  dec!(58.00),  dec!(38.67),  dec!(19.33)],
    /* H */ [dec!(232.83), dec!(211.67), dec!(190.50), dec!(169.33), dec!(148.17), dec!(127.00), dec!(105.83), dec!(84.67),  dec!(63.50),  dec!(42.33),  dec!(21.17)],
    /* I */ [dec!(253.00), dec!(230.00), dec!(207.00), dec!(184.00), dec!(161.00), dec!(138.00), dec!(115.00), dec!(92.00),  dec!(69.00),  dec!(46.00),  dec!(23.00)],
    /* J */ [dec!(273.17), dec!(248.33), dec!(223.50), dec!(198.67), dec!(173.83), dec!(149.00), dec!(124.17), dec!(99.33),  dec!(74.50),  dec!(49.67),  dec!(24.83)],
    /* K */ [dec!(293.33), dec!(266.67), dec!(240.00), dec!(213.33), dec!(186.67), dec!(160.00), dec!(133.33), dec!(106.67), dec!(80.00),  dec!(53.33),  dec!(26.67)],
    /* L */ [dec!(313.50), dec!(285.00), dec!(256.50), dec!(228.00), dec!(199.50), dec!(171.00), dec!(142.50), dec!(114.00), dec!(85.50),  dec!(57.00),  dec!(28.50)],
    /* M */ [dec!(333.67), dec!(303.33), dec!(273.00), dec!(242.67), dec!(212.33), dec!(182.00), dec!(151.67), dec!(121.33), dec!(91.00),  dec!(60.67),  dec!(30.33)],
    /* N */ [dec!(353.83), dec!(321.67), dec!(289.50), dec!(257.33), dec!(225.17), dec!(193.00), dec!(160.83), dec!(128.67), dec!(96.50),  dec!(64.33),  dec!(32.17)],
    /* O */ [dec!(374.00), dec!(340.00), dec!(306.00), dec!(272.00), dec!(238.00), dec!(204.00), dec!(170.00), dec!(136.00), dec!(102.00), dec!(68.00),  dec!(34.00)],
    /* P */ [dec!(394.17), dec!(358.33), dec!(322.50), dec!(286.67), dec!(250.83), dec!(215.00), dec!(179.17), dec!(143.33), dec!(107.50), dec!(71.67),  dec!(35.83)],
    /* Q */ [dec!(414.33), dec!(376.67), dec!(339.00), dec!(301.33), dec!(263.67), dec!(226.00), dec!(188.33), dec!(150.67), dec!(113.00), dec!(75.33),  dec!(37.67)],
    /* R */ [dec!(434.50), dec!(395.00), dec!(355.50), dec!(316.00), dec!(276.50), dec!(237.00), dec!(197.50), dec!(158.00), dec!(118.50), dec!(79.00),  dec!(39.50)],
    /* S */ [dec!(454.67), dec!(413.33), dec!(372.00), dec!(330.67), dec!(289.33), dec!(248.00), dec!(206.67), dec!(165.33), dec!(124.00), dec!(82.67),  dec!(41.33)],
    /* T */ [dec!(474.83), dec!(431.67), dec!(388.50), dec!(345.33), dec!(302.17), dec!(259.00), dec!(215.83), dec!(172.67), dec!(129.50), dec!(86.33),  dec!(43.17)],
    /* U */ [dec!(495.00), dec!(450.00), dec!(405.00), dec!(360.00), dec!(315.00), dec!(270.00), dec!(225.00), dec!(180.00), dec!(135.00), dec!(90.00),  dec!(45.00)],
    /* V */ [dec!(504.17), dec!(458.33), dec!(412.50), dec!(366.67), dec!(320.83), dec!(275.00), dec!(229.17), dec!(183.33), dec!(137.50), dec!(91.67),  dec!(45.83)],
];

#[rustfmt::skip]
const PARTIAL_LOGGING: [[Decimal; 11]; 22] = [
    //       Aug           Sep           Oct           Nov           Dec           Jan           Feb           Mar           Apr           May           Jun
    /* A */ [dec!(68.75),  dec!(62.50),  dec!(56.25),  dec!(50.00),  dec!(43.75),  dec!(37.50),  dec!(31.25),  dec!(25.00),  dec!(18.75),  dec!(12.50),  dec!(6.25)],
    /* B */ [dec!(83.88),  dec!(76.25),  dec!(68.63),  dec!(61.00),  dec!(53.38),  dec!(45.75),  dec!(38.13),  dec!(30.50),  dec!(22.88),  dec!(15.25),  dec!(7.63)],
    /* C */ [dec!(99.00),  dec!(90.00),  dec!(81.00),  dec!(72.00),  dec!(63.00),  dec!(54.00),  dec!(45.00),  dec!(36.00),  dec!(27.00),  dec!(18.00),  dec!(9.00)],
    /* D */ [dec!(114.13), dec!(103.75), dec!(93.38),  dec!(83.00),  dec!(72.63),  dec!(62.25),  dec!(51.88),  dec!(41.50),  dec!(31.13),  dec!(20.75),  dec!(10.38)],
    /* E */ [dec!(129.25), dec!(117.50), dec!(105.75), dec!(94.00),  dec!(82.25),  dec!(70.50),  dec!(58.75),  dec!(47.00),  dec!(35.25),  dec!(23.50),  dec!(11.75)],
    /* F */ [dec!(144.38), dec!(131.25), dec!(118.13), dec!(105.00), dec!(91.88),  dec!(78.75),  dec!(65.63),  dec!(52.50),  dec!(39.38),  dec!(26.25),  dec!(13.13)],
    /* G */ [dec!(159.50), dec!(145.00), dec!(130.50), dec!(116.00), dec!(101.50), dec!(87.00),  dec!(72.50),  dec!(58.00),  dec!(43.50),  dec!(29.00),  dec!(14.50)],
    /* H */ [dec!(174.63), dec!(158.75), dec!(142.88), dec!(127.00), dec!(111.13), dec!(95.25),  dec!(79.38),  dec!(63.50),  dec!(47.63),  dec!(31.75),  dec!(15.88)],
    /* I */ [dec!(189.75), dec!(172.50), dec!(155.25), dec!(138.00), dec!(120.75), dec!(103.50), dec!(86.25),  dec!(69.00),  dec!(51.75),  dec!(34.50),  dec!(17.25)],
    /* J */ [dec!(204.88), dec!(186.25), dec!(167.63), dec!(149.00), dec!(130.38), dec!(111.75), dec!(93.13),  dec!(74.50),  dec!(55.88),  dec!(37.25),  dec!(18.63)],
    /* K */ [dec!(220.00), dec!(200.00), dec!(180.00), dec!(160.00), dec!(140.00), dec!(120.00), dec!(100.00), dec!(80.00),  dec!(60.00),  dec!(40.00),  dec!(20.00)],
    /* L */ [dec!(235.13), dec!(213.75), dec!(192.38), dec!(171.00), dec!(149.63), dec!(128.25), dec!(106.88), dec!(85.50),  dec!(64.13),  dec!(42.75),  dec!(21.38)],
    /* M */ [dec!(250.25), dec!(227.50), dec!(204.75), dec!(182.00), dec!(159.25), dec!(136.50), dec!(113.75), dec!(91.00),  dec!(68.25),  dec!(45.50),  dec!(22.75)],
    /* N */ [dec!(265.38), dec!(241.25), dec!(217.13), dec!(193.00), dec!(168.88), dec!(144.75), dec!(120.63), dec!(96.50),  dec!(72.38),  dec!(48.25),  dec!(24.13)],
    /* O */ [dec!(280.50), dec!(255.00), dec!(229.50), dec!(204.00), dec!(178.50), dec!(153.00), dec!(127.50), dec!(102.00), dec!(76.50),  dec!(51.00),  dec!(25.50)],
    /* P */ [dec!(295.63), dec!(268.75), dec!(241.88), dec!(215.00), dec!(188.13), dec!(161.25), dec!(134.38), dec!(107.50), dec!(80.63),  dec!(53.75),  dec!(26.88)],
    /* Q */ [dec!(310.75), dec!(282.50), dec!(254.25), dec!(226.00), dec!(197.75), dec!(169.50), dec!(141.25), dec!(113.00), dec!(84.75),  dec!(56.50),  dec!(28.25)],
    /* R */ [dec!(325.88), dec!(296.25), dec!(266.63), dec!(237.00), dec!(207.38), dec!(177.75), dec!(148.13), dec!(118.50), dec!(88.88),  dec!(59.25),  dec!(29.63)],
    /* S */ [dec!(341.00), dec!(310.00), dec!(279.00), dec!(248.00), dec!(217.00), dec!(186.00), dec!(155.00), dec!(124.00), dec!(93.00),  dec!(62.00),  dec!(31.00)],
    /* T */ [dec!(356.13), dec!(323.75), dec!(291.38), dec!(259.00), dec!(226.63), dec!(194.25), dec!(161.88), dec!(129.50), dec!(97.13),  dec!(64.75),  dec!(32.38)],
    /* U */ [dec!(371.25), dec!(337.50), dec!(303.75), dec!(270.00), dec!(236.25), dec!(202.50), dec!(168.75), dec!(135.00), dec!(101.25), dec!(67.50),  dec!(33.75)],
    /* V */ [dec!(378.13), dec!(343.75), dec!(309.38), dec!(275.00), dec!(240.63), dec!(206.25), dec!(171.88), dec!(137.50), dec!(103.13), dec!(68.75),  dec!(34.38)],
];
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // annual tables
    // =========================================================================

    #[test]
    fn annual_tax_matches_published_endpoints() {
        let tables = RateTables::irs();

        assert_eq!(tables.annual_tax(WeightCategory::A), dec!(100.00));
        assert_eq!(tables.annual_tax(WeightCategory::C), dec!(144.00));
        assert_eq!(tables.annual_tax(WeightCategory::U), dec!(540.00));
        assert_eq!(tables.annual_tax(WeightCategory::V), dec!(550.00));
    }

    #[test]
    fn annual_logging_tax_matches_published_endpoints() {
        let tables = RateTables::irs();

        assert_eq!(tables.annual_logging_tax(WeightCategory::A), dec!(75.00));
        assert_eq!(tables.annual_logging_tax(WeightCategory::B), dec!(91.50));
        assert_eq!(tables.annual_logging_tax(WeightCategory::V), dec!(412.50));
    }

    #[test]
    fn category_w_has_no_rates() {
        let tables = RateTables::irs();

        assert_eq!(tables.annual_tax(WeightCategory::W), Decimal::ZERO);
        assert_eq!(tables.annual_logging_tax(WeightCategory::W), Decimal::ZERO);
        for month in 1..=12 {
            assert_eq!(tables.partial_tax(TaxKind::Regular, WeightCategory::W, month), None);
            assert_eq!(tables.partial_tax(TaxKind::Logging, WeightCategory::W, month), None);
        }
    }

    // =========================================================================
    // partial-period tables
    // =========================================================================

    #[test]
    fn partial_tax_has_no_july_column() {
        let tables = RateTables::irs();

        for category in WeightCategory::ALL {
            assert_eq!(tables.partial_tax(TaxKind::Regular, category, 7), None);
            assert_eq!(tables.partial_tax(TaxKind::Logging, category, 7), None);
        }
    }

    #[test]
    fn partial_tax_rejects_out_of_range_months() {
        let tables = RateTables::irs();

        assert_eq!(tables.partial_tax(TaxKind::Regular, WeightCategory::A, 0), None);
        assert_eq!(tables.partial_tax(TaxKind::Regular, WeightCategory::A, 13), None);
    }

    #[test]
    fn partial_tax_reads_published_values() {
        let tables = RateTables::irs();

        assert_eq!(
            tables.partial_tax(TaxKind::Regular, WeightCategory::A, 8),
            Some(dec!(91.67))
        );
        assert_eq!(
            tables.partial_tax(TaxKind::Regular, WeightCategory::B, 6),
            Some(dec!(10.17))
        );
        assert_eq!(
            tables.partial_tax(TaxKind::Regular, WeightCategory::C, 3),
            Some(dec!(48.00))
        );
        assert_eq!(
            tables.partial_tax(TaxKind::Logging, WeightCategory::B, 8),
            Some(dec!(83.88))
        );
        assert_eq!(
            tables.partial_tax(TaxKind::Logging, WeightCategory::V, 6),
            Some(dec!(34.38))
        );
    }

    #[test]
    fn partial_tax_decreases_through_the_period() {
        let tables = RateTables::irs();
        let period = [8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6];

        for category in WeightCategory::ALL.into_iter().filter(|c| c.is_taxable()) {
            for kind in [TaxKind::Regular, TaxKind::Logging] {
                let mut previous = tables.annual_for(kind, category);
                for month in period {
                    let rate = tables.partial_tax(kind, category, month).unwrap();
                    assert!(rate < previous, "{category} {kind:?} month {month}");
                    previous = rate;
                }
            }
        }
    }

    #[test]
    fn annual_for_selects_column() {
        let tables = RateTables::irs();

        assert_eq!(tables.annual_for(TaxKind::Regular, WeightCategory::D), dec!(166.00));
        assert_eq!(tables.annual_for(TaxKind::Logging, WeightCategory::D), dec!(124.50));
    }
}
