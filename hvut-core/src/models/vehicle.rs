use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WeightCategory;
use crate::rates::TaxKind;

/// Month of first use on public highways, e.g. `202510` for October 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FirstUseMonth {
    pub year: i32,
    pub month: u32,
}

impl FirstUseMonth {
    /// Parses `YYYYMM` (or `YYYY-MM`). Returns `None` for anything else,
    /// including a month outside `1..=12`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = digits[..4].parse().ok()?;
        let month = digits[4..].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// July starts the tax period, so it is the only month taxed at the annual rate.
    pub fn is_full_period(&self) -> bool {
        self.month == 7
    }
}

impl fmt::Display for FirstUseMonth {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// One vehicle row of Schedule 1, as entered by the filer.
///
/// Text fields are kept as entered; parsing happens in the calculators so a
/// malformed value degrades instead of failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    /// 17-character vehicle identification number.
    pub vin: String,
    pub weight_category: Option<WeightCategory>,
    /// Raw `YYYYMM` month of first use.
    pub first_use_month: Option<String>,
    pub is_logging: bool,
    pub is_suspended: bool,
    /// Agricultural vehicle driven 7,500 miles or less.
    pub is_agricultural: bool,
    /// Non-agricultural vehicle driven 5,000 miles or less.
    pub mileage_limited: bool,

    // Disposal (sold, destroyed or stolen)
    pub disposal_date: Option<NaiveDate>,
    pub disposal_reason: Option<String>,
    pub disposal_amount: Option<Decimal>,

    // Corrections
    pub vin_corrected: bool,
    pub vin_correction_reason: Option<String>,
    pub tgw_increased: bool,
    pub tgw_increase_month: Option<String>,
    pub tgw_previous_category: Option<WeightCategory>,
}

impl Vehicle {
    /// Whether one of the suspension flags forces this vehicle into category `W`.
    pub fn is_forced_suspended(&self) -> bool {
        self.is_suspended || self.is_agricultural || self.mileage_limited
    }

    /// Category the vehicle is reported and taxed under.
    ///
    /// `W` whenever a suspension flag is set, otherwise the entered category.
    pub fn effective_category(&self) -> Option<WeightCategory> {
        if self.is_forced_suspended() {
            Some(WeightCategory::W)
        } else {
            self.weight_category
        }
    }

    pub fn first_use(&self) -> Option<FirstUseMonth> {
        self.first_use_month.as_deref().and_then(FirstUseMonth::parse)
    }

    pub fn tax_kind(&self) -> TaxKind {
        if self.is_logging {
            TaxKind::Logging
        } else {
            TaxKind::Regular
        }
    }
}
