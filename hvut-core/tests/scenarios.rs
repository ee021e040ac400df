//! Worked examples and pipeline properties checked through the public API.

use chrono::NaiveDate;
use hvut_core::calculations::{DisposalCreditCalculator, VehicleTaxCalculator, disposal_lookup_key};
use hvut_core::{
    FilerRecord, Filing, FilingEngine, PaymentMethod, RateTables, TaxKind, ValidationConfig,
    ValidationError, Vehicle, WeightCategory,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CAPTCHA: Option<&str> = Some("captcha-token");

fn engine() -> FilingEngine<'static> {
    FilingEngine::new(RateTables::irs(), ValidationConfig::default())
}

fn filer() -> FilerRecord {
    FilerRecord {
        business_name: "Ridgeline Hauling LLC".to_string(),
        ein: "12-3456789".to_string(),
        address_line: "100 Main St".to_string(),
        city: "Boise".to_string(),
        state: "ID".to_string(),
        zip: "83702".to_string(),
        officer_name: "Dana Whitfield".to_string(),
        officer_title: "Owner".to_string(),
        officer_ssn: "123-45-6789".to_string(),
        taxpayer_pin: "24680".to_string(),
        signature: "Dana Whitfield".to_string(),
        payment_method: Some(PaymentMethod::Eftps),
        ..Default::default()
    }
}

fn vehicle(
    vin: &str,
    category: WeightCategory,
    month: &str,
) -> Vehicle {
    Vehicle {
        vin: vin.to_string(),
        weight_category: Some(category),
        first_use_month: Some(month.to_string()),
        ..Default::default()
    }
}

fn validate(
    filer: FilerRecord,
    vehicles: Vec<Vehicle>,
) -> Result<(), ValidationError> {
    let engine = engine();
    let computation = engine.compute(&vehicles);
    engine
        .validator()
        .validate(&filer, &vehicles, &computation, CAPTCHA)
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn test_category_c_july_is_annual_rate() {
    let tables = RateTables::irs();
    let tax = VehicleTaxCalculator::new(tables)
        .calculate(&vehicle("1HGCM82633A004352", WeightCategory::C, "202507"));

    assert_eq!(tax, dec!(144.00));
}

#[test]
fn test_category_c_october_uses_table_constant() {
    let tables = RateTables::irs();
    let tax = VehicleTaxCalculator::new(tables)
        .calculate(&vehicle("1HGCM82633A004352", WeightCategory::C, "202510"));

    assert_eq!(Some(tax), tables.partial_tax(TaxKind::Regular, WeightCategory::C, 10));
    assert_eq!(tax, dec!(108.00));
}

#[test]
fn test_disposal_credit_matches_irs_worked_example() {
    let mut truck = vehicle("1HGCM82633A004352", WeightCategory::C, "202507");
    truck.disposal_date = NaiveDate::from_ymd_opt(2025, 10, 20);
    truck.disposal_reason = Some("Sold".to_string());

    let credit = DisposalCreditCalculator::new(RateTables::irs()).calculate(&truck);

    // Four months of use maps to the March column ($48.00), not April ($36.00).
    assert_eq!(disposal_lookup_key(4), Some(3));
    assert_eq!(credit, dec!(96.00));
    assert_ne!(credit, dec!(108.00));
}

#[test]
fn test_placeholder_ein_rejected_on_otherwise_valid_filing() {
    let filer = FilerRecord {
        ein: "99-9999999".to_string(),
        ..filer()
    };

    let result = validate(
        filer,
        vec![vehicle("1HGCM82633A004352", WeightCategory::C, "202507")],
    );

    assert_eq!(result, Err(ValidationError::PlaceholderEin));
}

#[test]
fn test_placeholder_ein_in_non_ascii_digits_rejected() {
    let filer = FilerRecord {
        ein: "٩٩-٩٩٩٩٩٩٩".to_string(),
        taxpayer_pin: "١٢٣٤٥".to_string(),
        ..filer()
    };

    let result = validate(
        filer,
        vec![vehicle("1HGCM82633A004352", WeightCategory::C, "202507")],
    );

    assert_eq!(result, Err(ValidationError::InvalidEinFormat));
}

#[test]
fn test_vins_differing_only_by_case_are_duplicates() {
    let result = validate(
        filer(),
        vec![
            vehicle("1HGCM82633A004352", WeightCategory::C, "202507"),
            vehicle("1hgcm82633a004352", WeightCategory::D, "202508"),
        ],
    );

    assert_eq!(
        result,
        Err(ValidationError::DuplicateVin {
            vin: "1hgcm82633a004352".to_string()
        })
    );
}

#[test]
fn test_category_w_without_mileage_flag_rejected() {
    let result = validate(
        filer(),
        vec![
            vehicle("1HGCM82633A004352", WeightCategory::C, "202507"),
            vehicle("1FUJGLDR5CLBP8834", WeightCategory::W, "202507"),
        ],
    );

    let error = result.unwrap_err();
    assert_eq!(error, ValidationError::SuspendedWithoutMileageLimit { vehicle: 2 });
    assert!(error.to_string().contains("category W"));
}

#[test]
fn test_valid_filing_passes() {
    let mut suspended = vehicle("1FUJGLDR5CLBP8834", WeightCategory::W, "202507");
    suspended.mileage_limited = true;

    let result = validate(
        filer(),
        vec![
            vehicle("1HGCM82633A004352", WeightCategory::C, "202507"),
            suspended,
        ],
    );

    assert_eq!(result, Ok(()));
}

// =============================================================================
// Pipeline properties
// =============================================================================

#[test]
fn test_category_w_is_never_taxed() {
    let calculator = VehicleTaxCalculator::new(RateTables::irs());

    for month in ["202507", "202508", "202512", "202606"] {
        for logging in [false, true] {
            let mut v = vehicle("1HGCM82633A004352", WeightCategory::W, month);
            v.is_logging = logging;
            assert_eq!(calculator.calculate(&v), Decimal::ZERO, "{month} logging={logging}");
        }
    }
}

#[test]
fn test_july_always_equals_annual_rate() {
    let tables = RateTables::irs();
    let calculator = VehicleTaxCalculator::new(tables);

    for category in WeightCategory::ALL {
        let mut v = vehicle("1HGCM82633A004352", category, "202507");
        assert_eq!(
            calculator.calculate(&v),
            tables.annual_for(TaxKind::Regular, category),
            "{category}"
        );
        v.is_logging = true;
        assert_eq!(
            calculator.calculate(&v),
            tables.annual_for(TaxKind::Logging, category),
            "{category} logging"
        );
    }
}

#[test]
fn test_table_totals_are_consistent() {
    let mut logging = vehicle("3AKJGLD51ESFL1234", WeightCategory::H, "202511");
    logging.is_logging = true;
    let vehicles = vec![
        vehicle("1HGCM82633A004352", WeightCategory::C, "202507"),
        vehicle("1FUJGLDR5CLBP8834", WeightCategory::C, "202602"),
        logging,
    ];

    let computation = engine().compute(&vehicles);

    let mut sum = Decimal::ZERO;
    for row in computation.category_aggregates.values() {
        assert_eq!(row.regular_total_tax, row.regular_annual_tax + row.regular_partial_tax);
        assert_eq!(row.logging_total_tax, row.logging_annual_tax + row.logging_partial_tax);
        sum += row.total_tax();
    }
    assert_eq!(computation.grand_totals.total_tax(), sum);
    assert_eq!(computation.grand_totals.vehicle_count(), 3);

    let per_vehicle: Decimal = computation.vehicle_results.iter().map(|r| r.tax).sum();
    assert_eq!(per_vehicle, sum);
}

#[test]
fn test_empty_vehicle_list_has_zero_totals() {
    let computation = engine().compute(&[]);

    assert_eq!(computation.grand_totals.total_tax(), Decimal::ZERO);
    assert_eq!(computation.grand_totals.vehicle_count(), 0);
    assert_eq!(computation.balance_due(), Decimal::ZERO);
}

#[test]
fn test_pipeline_is_idempotent() {
    let mut sold = vehicle("1HGCM82633A004352", WeightCategory::C, "202507");
    sold.disposal_date = NaiveDate::from_ymd_opt(2026, 2, 1);
    sold.disposal_reason = Some("Destroyed".to_string());
    let filing = Filing {
        filer: filer(),
        vehicles: vec![sold, vehicle("1FUJGLDR5CLBP8834", WeightCategory::K, "202509")],
    };

    let first = engine().evaluate(&filing, CAPTCHA);
    let second = engine().evaluate(&filing, CAPTCHA);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
