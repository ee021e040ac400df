use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the balance due is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Direct debit set up with the return; needs [`ElectronicWithdrawal`] details.
    ElectronicFundsWithdrawal,
    Eftps,
    CreditOrDebitCard,
    CheckOrMoneyOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
}

/// Bank details for an electronic funds withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectronicWithdrawal {
    pub routing_number: String,
    pub account_number: String,
    pub account_type: Option<AccountType>,
    pub payment_date: Option<NaiveDate>,
    pub phone: String,
}

/// Paid preparer section. Present only when a paid preparer is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaidPreparer {
    pub name: String,
    /// Preparer tax identification number.
    pub ptin: String,
    pub firm_name: String,
    pub firm_ein: String,
    pub firm_phone: String,
}

/// Third party designee section. Present only when the filer consents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Designee {
    pub name: String,
    pub phone: String,
    pub pin: String,
}

/// Checkboxes at the top of the return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnFlags {
    pub address_change: bool,
    pub amended_return: bool,
    /// Month (`YYYYMM`) the amended return applies to.
    pub amended_month: Option<String>,
    pub vin_correction: bool,
    pub vin_correction_explanation: Option<String>,
    pub final_return: bool,
}

/// Everything on the return except the vehicle schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilerRecord {
    pub business_name: String,
    /// Employer identification number, `NN-NNNNNNN`.
    pub ein: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Contact address, usually filled from the signed-in identity.
    pub email: Option<String>,

    pub officer_name: String,
    pub officer_title: String,
    pub officer_ssn: String,
    /// Five digit self-select signature PIN.
    pub taxpayer_pin: String,
    pub signature: String,

    pub paid_preparer: Option<PaidPreparer>,
    pub designee: Option<Designee>,

    pub payment_method: Option<PaymentMethod>,
    pub electronic_withdrawal: ElectronicWithdrawal,

    pub flags: ReturnFlags,
}
