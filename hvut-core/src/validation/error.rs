use rust_decimal::Decimal;
use thiserror::Error;

/// The first business rule a submission breaks.
///
/// `Display` gives the message shown to the filer. Vehicle positions are
/// 1-based, matching the row numbers on Schedule 1.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please complete the CAPTCHA verification")]
    CaptchaRequired,

    // Filer
    #[error("Business name is required")]
    BusinessNameRequired,

    #[error("EIN is required")]
    EinRequired,

    #[error("EIN must be in the format NN-NNNNNNN")]
    InvalidEinFormat,

    /// The all-nines EIN is a placeholder the e-file system rejects.
    #[error("EIN 99-9999999 is not a valid employer identification number")]
    PlaceholderEin,

    #[error("Officer name is required")]
    OfficerNameRequired,

    #[error("Officer title is required")]
    OfficerTitleRequired,

    #[error("Officer SSN must be in the format NNN-NN-NNNN")]
    InvalidOfficerSsn,

    #[error("Taxpayer PIN must be exactly 5 digits")]
    InvalidTaxpayerPin,

    #[error("Taxpayer PIN cannot be 00000")]
    ZeroTaxpayerPin,

    #[error("Address is required")]
    AddressRequired,

    #[error("Address must be {max} characters or fewer")]
    AddressTooLong { max: usize },

    // Paid preparer
    #[error("Preparer name is required")]
    PreparerNameRequired,

    #[error("Preparer PTIN is required")]
    PreparerPtinRequired,

    #[error("Preparer firm name is required")]
    PreparerFirmNameRequired,

    #[error("Preparer firm EIN must be in the format NN-NNNNNNN")]
    InvalidPreparerFirmEin,

    #[error("Preparer firm phone must be 10 digits")]
    InvalidPreparerFirmPhone,

    // Third party designee
    #[error("Designee name is required")]
    DesigneeNameRequired,

    #[error("Designee phone must be 10 digits")]
    InvalidDesigneePhone,

    #[error("Designee PIN must be exactly 5 digits")]
    InvalidDesigneePin,

    // Return flags
    #[error("Amended return month is required")]
    AmendedMonthRequired,

    #[error("A taxable gross weight increase must be filed as an amended return")]
    WeightIncreaseRequiresAmendedReturn,

    #[error("VIN correction explanation is required")]
    VinCorrectionExplanationRequired,

    #[error("A VIN correction must list at least one vehicle")]
    VinCorrectionRequiresVehicle,

    // Signature and payment
    #[error("Signature is required")]
    SignatureRequired,

    #[error("Routing number must be 9 digits")]
    InvalidRoutingNumber,

    #[error("Bank account number is required")]
    AccountNumberRequired,

    #[error("Bank account type is required")]
    AccountTypeRequired,

    #[error("Payment date is required")]
    PaymentDateRequired,

    #[error("Payment phone must be 10 digits")]
    InvalidPaymentPhone,

    #[error("A payment method is required for a balance due of ${balance_due}")]
    PaymentMethodRequired { balance_due: Decimal },

    // Vehicles
    #[error("At least one vehicle is required")]
    NoVehicles,

    #[error("Vehicle {vehicle}: VIN is required")]
    VinRequired { vehicle: usize },

    #[error("Vehicle {vehicle}: VIN must be 17 letters or digits")]
    InvalidVin { vehicle: usize },

    #[error("Vehicle {vehicle}: first use month is required")]
    FirstUseMonthRequired { vehicle: usize },

    #[error("Vehicle {vehicle}: weight category is required")]
    WeightCategoryRequired { vehicle: usize },

    #[error(
        "Vehicle {vehicle}: category W vehicles must be marked agricultural or mileage limited"
    )]
    SuspendedWithoutMileageLimit { vehicle: usize },

    #[error("Vehicle {vehicle}: disposal reason is required when a disposal date is given")]
    DisposalReasonRequired { vehicle: usize },

    #[error("Vehicle {vehicle}: weight increase month and previous category are required")]
    WeightIncreaseDetailsRequired { vehicle: usize },

    #[error("Vehicle {vehicle}: VIN correction reason is required")]
    VinCorrectionReasonRequired { vehicle: usize },

    #[error("Duplicate VIN: {vin}")]
    DuplicateVin { vin: String },

    #[error("Total credits (${credits}) cannot exceed total tax (${tax})")]
    CreditsExceedTax { credits: Decimal, tax: Decimal },

    #[error("Credits for first use month {month} (${credits}) cannot exceed that month's tax (${tax})")]
    MonthlyCreditsExceedTax {
        month: String,
        credits: Decimal,
        tax: Decimal,
    },
}
