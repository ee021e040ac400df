//! The ordered rule list.
//!
//! Rules run top to bottom and stop at the first failure, so the order of
//! [`RULES`] decides which message a submission with several problems gets.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use super::ValidationContext;
use super::error::ValidationError;
use super::format::{
    is_blank, is_blank_opt, is_ein, is_phone, is_pin, is_placeholder_ein, is_routing_number,
    is_ssn, is_vin,
};
use crate::models::{FirstUseMonth, PaymentMethod, WeightCategory};

/// Longest address line the form accepts.
pub const MAX_ADDRESS_LEN: usize = 35;

pub(crate) type Rule = fn(&ValidationContext<'_>) -> Result<(), ValidationError>;

/// Every rule, in evaluation order, with a name for logging.
pub(crate) const RULES: &[(&str, Rule)] = &[
    ("captcha", captcha),
    ("filer", filer),
    ("paid_preparer", paid_preparer),
    ("designee", designee),
    ("amended_month", amended_month),
    ("weight_increase_amended", weight_increase_amended),
    ("vin_correction", vin_correction),
    ("signature", signature),
    ("electronic_withdrawal", electronic_withdrawal),
    ("payment_method", payment_method),
    ("has_vehicles", has_vehicles),
    ("vehicle_fields", vehicle_fields),
    ("unique_vins", unique_vins),
    ("total_credits", total_credits),
    ("monthly_credits", monthly_credits),
];

fn ensure(
    ok: bool,
    error: ValidationError,
) -> Result<(), ValidationError> {
    if ok { Ok(()) } else { Err(error) }
}

fn captcha(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    if ctx.config.environment.waives_captcha() {
        return Ok(());
    }
    ensure(
        !is_blank_opt(ctx.captcha_token),
        ValidationError::CaptchaRequired,
    )
}

fn filer(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let filer = ctx.filer;
    ensure(
        !is_blank(&filer.business_name),
        ValidationError::BusinessNameRequired,
    )?;
    ensure(!is_blank(&filer.ein), ValidationError::EinRequired)?;
    ensure(is_ein(&filer.ein), ValidationError::InvalidEinFormat)?;
    ensure(
        !is_placeholder_ein(&filer.ein),
        ValidationError::PlaceholderEin,
    )?;
    ensure(
        !is_blank(&filer.officer_name),
        ValidationError::OfficerNameRequired,
    )?;
    ensure(
        !is_blank(&filer.officer_title),
        ValidationError::OfficerTitleRequired,
    )?;
    ensure(
        is_ssn(&filer.officer_ssn),
        ValidationError::InvalidOfficerSsn,
    )?;
    ensure(
        is_pin(&filer.taxpayer_pin),
        ValidationError::InvalidTaxpayerPin,
    )?;
    ensure(
        filer.taxpayer_pin.trim() != "00000",
        ValidationError::ZeroTaxpayerPin,
    )?;
    ensure(
        !is_blank(&filer.address_line),
        ValidationError::AddressRequired,
    )?;
    ensure(
        filer.address_line.trim().chars().count() <= MAX_ADDRESS_LEN,
        ValidationError::AddressTooLong {
            max: MAX_ADDRESS_LEN,
        },
    )
}

fn paid_preparer(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let Some(preparer) = &ctx.filer.paid_preparer else {
        return Ok(());
    };
    ensure(
        !is_blank(&preparer.name),
        ValidationError::PreparerNameRequired,
    )?;
    ensure(
        !is_blank(&preparer.ptin),
        ValidationError::PreparerPtinRequired,
    )?;
    ensure(
        !is_blank(&preparer.firm_name),
        ValidationError::PreparerFirmNameRequired,
    )?;
    ensure(
        is_ein(&preparer.firm_ein),
        ValidationError::InvalidPreparerFirmEin,
    )?;
    ensure(
        is_phone(&preparer.firm_phone),
        ValidationError::InvalidPreparerFirmPhone,
    )
}

fn designee(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let Some(designee) = &ctx.filer.designee else {
        return Ok(());
    };
    ensure(
        !is_blank(&designee.name),
        ValidationError::DesigneeNameRequired,
    )?;
    ensure(
        is_phone(&designee.phone),
        ValidationError::InvalidDesigneePhone,
    )?;
    ensure(is_pin(&designee.pin), ValidationError::InvalidDesigneePin)
}

fn amended_month(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let flags = &ctx.filer.flags;
    ensure(
        !flags.amended_return || !is_blank_opt(flags.amended_month.as_deref()),
        ValidationError::AmendedMonthRequired,
    )
}

fn weight_increase_amended(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let any_increase = ctx.vehicles.iter().any(|v| v.tgw_increased);
    ensure(
        !any_increase || ctx.filer.flags.amended_return,
        ValidationError::WeightIncreaseRequiresAmendedReturn,
    )
}

fn vin_correction(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let flags = &ctx.filer.flags;
    if !flags.vin_correction {
        return Ok(());
    }
    ensure(
        !is_blank_opt(flags.vin_correction_explanation.as_deref()),
        ValidationError::VinCorrectionExplanationRequired,
    )?;
    ensure(
        !ctx.vehicles.is_empty(),
        ValidationError::VinCorrectionRequiresVehicle,
    )
}

fn signature(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    ensure(
        !is_blank(&ctx.filer.signature),
        ValidationError::SignatureRequired,
    )
}

fn electronic_withdrawal(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    if ctx.filer.payment_method != Some(PaymentMethod::ElectronicFundsWithdrawal) {
        return Ok(());
    }
    let efw = &ctx.filer.electronic_withdrawal;
    ensure(
        is_routing_number(&efw.routing_number),
        ValidationError::InvalidRoutingNumber,
    )?;
    ensure(
        !is_blank(&efw.account_number),
        ValidationError::AccountNumberRequired,
    )?;
    ensure(
        efw.account_type.is_some(),
        ValidationError::AccountTypeRequired,
    )?;
    ensure(
        efw.payment_date.is_some(),
        ValidationError::PaymentDateRequired,
    )?;
    ensure(is_phone(&efw.phone), ValidationError::InvalidPaymentPhone)
}

fn payment_method(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let balance_due = ctx.computation.balance_due();
    ensure(
        balance_due <= Decimal::ZERO || ctx.filer.payment_method.is_some(),
        ValidationError::PaymentMethodRequired { balance_due },
    )
}

fn has_vehicles(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    ensure(!ctx.vehicles.is_empty(), ValidationError::NoVehicles)
}

fn vehicle_fields(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    for (index, v) in ctx.vehicles.iter().enumerate() {
        let vehicle = index + 1;
        ensure(!is_blank(&v.vin), ValidationError::VinRequired { vehicle })?;
        ensure(is_vin(&v.vin), ValidationError::InvalidVin { vehicle })?;
        ensure(
            !is_blank_opt(v.first_use_month.as_deref()),
            ValidationError::FirstUseMonthRequired { vehicle },
        )?;
        ensure(
            v.weight_category.is_some(),
            ValidationError::WeightCategoryRequired { vehicle },
        )?;
        ensure(
            v.weight_category != Some(WeightCategory::W) || v.is_agricultural || v.mileage_limited,
            ValidationError::SuspendedWithoutMileageLimit { vehicle },
        )?;
        ensure(
            v.disposal_date.is_none() || !is_blank_opt(v.disposal_reason.as_deref()),
            ValidationError::DisposalReasonRequired { vehicle },
        )?;
        ensure(
            !v.tgw_increased
                || (!is_blank_opt(v.tgw_increase_month.as_deref())
                    && v.tgw_previous_category.is_some()),
            ValidationError::WeightIncreaseDetailsRequired { vehicle },
        )?;
        ensure(
            !v.vin_corrected || !is_blank_opt(v.vin_correction_reason.as_deref()),
            ValidationError::VinCorrectionReasonRequired { vehicle },
        )?;
    }
    Ok(())
}

fn unique_vins(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for vehicle in ctx.vehicles {
        let vin = vehicle.vin.trim().to_ascii_uppercase();
        if !seen.insert(vin) {
            return Err(ValidationError::DuplicateVin {
                vin: vehicle.vin.trim().to_string(),
            });
        }
    }
    Ok(())
}

fn total_credits(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let credits = ctx.computation.total_credits();
    let tax = ctx.computation.grand_totals.total_tax();
    ensure(
        credits <= tax,
        ValidationError::CreditsExceedTax { credits, tax },
    )
}

/// Same as [`total_credits`] but within each first-use month.
fn monthly_credits(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let mut months: BTreeMap<FirstUseMonth, (Decimal, Decimal)> = BTreeMap::new();
    for (vehicle, result) in ctx.vehicles.iter().zip(&ctx.computation.vehicle_results) {
        let Some(month) = vehicle.first_use() else {
            continue;
        };
        let (tax, credits) = months.entry(month).or_default();
        *tax += result.tax;
        *credits += result.credit;
    }

    for (month, (tax, credits)) in months {
        ensure(
            credits <= tax,
            ValidationError::MonthlyCreditsExceedTax {
                month: month.to_string(),
                credits,
                tax,
            },
        )?;
    }
    Ok(())
}
