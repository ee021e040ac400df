use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of the Form 2290 category codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised weight category '{0}'")]
pub struct ParseWeightCategoryError(pub String);

/// Taxable gross weight category as printed on Form 2290.
///
/// `A` through `V` are weight brackets of increasing taxable gross weight.
/// `W` is the suspended bucket for vehicles expected to stay under the
/// mileage limit; it is reported but never taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightCategory {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
}

impl WeightCategory {
    /// Every category in form order, `W` last.
    pub const ALL: [WeightCategory; 23] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
        }
    }

    /// Case-insensitive parse of a single-letter code.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// Whether vehicles in this category owe tax at all.
    pub fn is_taxable(&self) -> bool {
        *self != Self::W
    }

    /// Row index into the rate tables; `None` for `W`.
    pub fn table_index(&self) -> Option<usize> {
        if self.is_taxable() {
            Some(*self as usize)
        } else {
            None
        }
    }

    /// Taxable gross weight range in pounds, as printed in the form's tax table.
    pub fn weight_range(&self) -> &'static str {
        match self {
            Self::A => "55,000",
            Self::B => "55,001 - 56,000",
            Self::C => "56,001 - 57,000",
            Self::D => "57,001 - 58,000",
            Self::E => "58,001 - 59,000",
            Self::F => "59,001 - 60,000",
            Self::G => "60,001 - 61,000",
            Self::H => "61,001 - 62,000",
            Self::I => "62,001 - 63,000",
            Self::J => "63,001 - 64,000",
            Self::K => "64,001 - 65,000",
            Self::L => "65,001 - 66,000",
            Self::M => "66,001 - 67,000",
            Self::N => "67,001 - 68,000",
            Self::O => "68,001 - 69,000",
            Self::P => "69,001 - 70,000",
            Self::Q => "70,001 - 71,000",
            Self::R => "71,001 - 72,000",
            Self::S => "72,001 - 73,000",
            Self::T => "73,001 - 74,000",
            Self::U => "74,001 - 75,000",
            Self::V => "Over 75,000",
            Self::W => "Suspended",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightCategory {
    type Err = ParseWeightCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseWeightCategoryError(s.to_string()))
    }
}
