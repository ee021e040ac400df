//! CSV loader for Schedule 1 vehicle lists.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only `vin`
//! is required; every other column may be left out or left empty.
//!
//! | Column                  | Type    | Notes                                     |
//! |-------------------------|---------|-------------------------------------------|
//! | `vin`                   | string  | 17 characters                             |
//! | `weight_category`       | string  | `A`..`W`, case-insensitive                |
//! | `first_use_month`       | string  | `YYYYMM`, e.g. `202510`                   |
//! | `is_logging`            | flag    |                                           |
//! | `is_suspended`          | flag    |                                           |
//! | `is_agricultural`       | flag    | 7,500 miles or less                       |
//! | `mileage_limited`       | flag    | 5,000 miles or less                       |
//! | `disposal_date`         | date    | `YYYY-MM-DD`                              |
//! | `disposal_reason`       | string  | e.g. `Sold`, `Stolen`                     |
//! | `disposal_amount`       | decimal |                                           |
//! | `vin_corrected`         | flag    |                                           |
//! | `vin_correction_reason` | string  |                                           |
//! | `tgw_increased`         | flag    |                                           |
//! | `tgw_increase_month`    | string  | `YYYYMM`                                  |
//! | `tgw_previous_category` | string  | `A`..`V`                                  |
//!
//! Flags accept `true`/`false`, `yes`/`no`, `y`/`n`, `x` and `1`/`0`. An
//! empty flag cell is `false`.
//!
//! ### Example
//!
//! ```csv
//! vin,weight_category,first_use_month,is_logging,disposal_date,disposal_reason
//! 1HGCM82633A004352,C,202507,,2025-10-01,Sold
//! 1FUJGLDR5CLBP8834,F,202510,yes,,
//! ```

use std::path::Path;

use chrono::NaiveDate;
use hvut_core::{Vehicle, WeightCategory};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    vin: String,
    #[serde(default)]
    weight_category: Option<String>,
    #[serde(default)]
    first_use_month: Option<String>,
    #[serde(default)]
    is_logging: Option<String>,
    #[serde(default)]
    is_suspended: Option<String>,
    #[serde(default)]
    is_agricultural: Option<String>,
    #[serde(default)]
    mileage_limited: Option<String>,
    #[serde(default)]
    disposal_date: Option<NaiveDate>,
    #[serde(default)]
    disposal_reason: Option<String>,
    #[serde(default)]
    disposal_amount: Option<Decimal>,
    #[serde(default)]
    vin_corrected: Option<String>,
    #[serde(default)]
    vin_correction_reason: Option<String>,
    #[serde(default)]
    tgw_increased: Option<String>,
    #[serde(default)]
    tgw_increase_month: Option<String>,
    #[serde(default)]
    tgw_previous_category: Option<String>,
}

/// Errors raised while reading a vehicle CSV.
///
/// `row` is the 1-based data row; the header is row 0.
#[derive(Debug, thiserror::Error)]
pub enum VehicleCsvError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read vehicle file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unrecognised weight category '{value}' on row {row}")]
    InvalidCategory { value: String, row: usize },

    #[error("column '{column}' has '{value}' on row {row}, expected yes or no")]
    InvalidFlag {
        column: &'static str,
        value: String,
        row: usize,
    },
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_category(
    value: Option<String>,
    row: usize,
) -> Result<Option<WeightCategory>, VehicleCsvError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    WeightCategory::parse(&value)
        .map(Some)
        .ok_or(VehicleCsvError::InvalidCategory { value, row })
}

fn parse_flag(
    column: &'static str,
    value: Option<String>,
    row: usize,
) -> Result<bool, VehicleCsvError> {
    let Some(value) = non_empty(value) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "x" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(VehicleCsvError::InvalidFlag { column, value, row }),
    }
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Vehicle, VehicleCsvError> {
    Ok(Vehicle {
        vin: row.vin,
        weight_category: parse_category(row.weight_category, row_number)?,
        first_use_month: non_empty(row.first_use_month),
        is_logging: parse_flag("is_logging", row.is_logging, row_number)?,
        is_suspended: parse_flag("is_suspended", row.is_suspended, row_number)?,
        is_agricultural: parse_flag("is_agricultural", row.is_agricultural, row_number)?,
        mileage_limited: parse_flag("mileage_limited", row.mileage_limited, row_number)?,
        disposal_date: row.disposal_date,
        disposal_reason: non_empty(row.disposal_reason),
        disposal_amount: row.disposal_amount,
        vin_corrected: parse_flag("vin_corrected", row.vin_corrected, row_number)?,
        vin_correction_reason: non_empty(row.vin_correction_reason),
        tgw_increased: parse_flag("tgw_increased", row.tgw_increased, row_number)?,
        tgw_increase_month: non_empty(row.tgw_increase_month),
        tgw_previous_category: parse_category(row.tgw_previous_category, row_number)?,
    })
}

/// Parses CSV text into vehicles, in file order.
///
/// # Errors
///
/// * [`VehicleCsvError::Parse`] when the CSV is malformed, the `vin` column is
///   missing, or a date or amount cannot be read.
/// * [`VehicleCsvError::InvalidCategory`] for an unknown category code.
/// * [`VehicleCsvError::InvalidFlag`] for a flag cell that is not yes or no.
pub fn load_from_str(input: &str) -> Result<Vec<Vehicle>, VehicleCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let vehicles = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = vehicles.len(), "parsed vehicle CSV");
    Ok(vehicles)
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Vehicle>, VehicleCsvError> {
    let contents = std::fs::read_to_string(path).map_err(|source| VehicleCsvError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
vin,weight_category,first_use_month
1HGCM82633A004352,C,202507
";

    const FULL_CSV: &str = "\
vin,weight_category,first_use_month,is_logging,is_suspended,is_agricultural,mileage_limited,disposal_date,disposal_reason,disposal_amount,vin_corrected,vin_correction_reason,tgw_increased,tgw_increase_month,tgw_previous_category
1HGCM82633A004352,f,202510,yes,no,,,2025-12-15,Sold,15000.00,x,Typo on prior return,1,202511,e
";

    // =========================================================================
    // Successful parsing
    // =========================================================================

    #[test]
    fn minimal_columns_leave_the_rest_at_defaults() {
        let vehicles = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(
            vehicles,
            vec![Vehicle {
                vin: "1HGCM82633A004352".to_string(),
                weight_category: Some(WeightCategory::C),
                first_use_month: Some("202507".to_string()),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn every_column_populated() {
        let vehicles = load_from_str(FULL_CSV).expect("should parse full CSV");
        let v = &vehicles[0];

        assert_eq!(v.weight_category, Some(WeightCategory::F));
        assert!(v.is_logging);
        assert!(!v.is_suspended);
        assert!(!v.is_agricultural);
        assert_eq!(v.disposal_date, NaiveDate::from_ymd_opt(2025, 12, 15));
        assert_eq!(v.disposal_reason.as_deref(), Some("Sold"));
        assert_eq!(v.disposal_amount, Some(dec!(15000.00)));
        assert!(v.vin_corrected);
        assert_eq!(v.vin_correction_reason.as_deref(), Some("Typo on prior return"));
        assert!(v.tgw_increased);
        assert_eq!(v.tgw_increase_month.as_deref(), Some("202511"));
        assert_eq!(v.tgw_previous_category, Some(WeightCategory::E));
    }

    #[test]
    fn empty_cells_become_none_and_false() {
        let csv = "\
vin,weight_category,first_use_month,is_logging,disposal_date,disposal_reason
1HGCM82633A004352,,,,,
";
        let vehicles = load_from_str(csv).expect("should parse");
        let v = &vehicles[0];

        assert_eq!(v.weight_category, None);
        assert_eq!(v.first_use_month, None);
        assert!(!v.is_logging);
        assert_eq!(v.disposal_date, None);
        assert_eq!(v.disposal_reason, None);
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "vin , weight_category , first_use_month\n 1HGCM82633A004352 , w , 202601 \n";
        let vehicles = load_from_str(csv).expect("should parse");

        assert_eq!(vehicles[0].vin, "1HGCM82633A004352");
        assert_eq!(vehicles[0].weight_category, Some(WeightCategory::W));
        assert_eq!(vehicles[0].first_use_month.as_deref(), Some("202601"));
    }

    #[test]
    fn rows_keep_file_order() {
        let csv = "vin,weight_category\nB0000000000000001,B\nA0000000000000001,A\n";
        let vins: Vec<String> = load_from_str(csv)
            .expect("should parse")
            .into_iter()
            .map(|v| v.vin)
            .collect();

        assert_eq!(vins, vec!["B0000000000000001", "A0000000000000001"]);
    }

    #[test]
    fn header_only_is_an_empty_list() {
        let vehicles = load_from_str("vin,weight_category\n").expect("header-only CSV is valid");
        assert!(vehicles.is_empty());
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn unknown_category_reports_value_and_row() {
        let csv = "vin,weight_category\nA0000000000000001,A\nB0000000000000001,Z\n";

        match load_from_str(csv).unwrap_err() {
            VehicleCsvError::InvalidCategory { value, row } => {
                assert_eq!(value, "Z");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_reports_column() {
        let csv = "vin,is_logging\nA0000000000000001,maybe\n";

        match load_from_str(csv).unwrap_err() {
            VehicleCsvError::InvalidFlag { column, value, row } => {
                assert_eq!(column, "is_logging");
                assert_eq!(value, "maybe");
                assert_eq!(row, 1);
            }
            other => panic!("expected InvalidFlag, got {other:?}"),
        }
    }

    #[test]
    fn missing_vin_column_is_a_parse_error() {
        let csv = "weight_category,first_use_month\nC,202507\n";

        assert!(matches!(load_from_str(csv), Err(VehicleCsvError::Parse(_))));
    }

    #[test]
    fn bad_date_is_a_parse_error() {
        let csv = "vin,disposal_date\nA0000000000000001,10/01/2025\n";

        assert!(matches!(load_from_str(csv), Err(VehicleCsvError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file(Path::new("/nonexistent/vehicles.csv"));

        assert!(matches!(result, Err(VehicleCsvError::Io { .. })));
    }
}
