//! Field format checks used by the rules.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("invalid pattern ", $re)));
    };
}

// ASCII digits only; `\d` is Unicode-aware.
pattern!(EIN, r"^[0-9]{2}-[0-9]{7}$");
pattern!(SSN, r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$");
pattern!(PIN, r"^[0-9]{5}$");
pattern!(ROUTING, r"^[0-9]{9}$");
pattern!(PHONE, r"^\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}$");
pattern!(VIN, r"^[A-Za-z0-9]{17}$");

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn is_blank_opt(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}

pub(crate) fn is_ein(value: &str) -> bool {
    EIN.is_match(value.trim())
}

/// The all-nines placeholder, with or without the hyphen.
pub(crate) fn is_placeholder_ein(value: &str) -> bool {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits == "999999999"
}

pub(crate) fn is_ssn(value: &str) -> bool {
    SSN.is_match(value.trim())
}

pub(crate) fn is_pin(value: &str) -> bool {
    PIN.is_match(value.trim())
}

pub(crate) fn is_routing_number(value: &str) -> bool {
    ROUTING.is_match(value.trim())
}

/// Ten digits, optionally written as `(555) 123-4567`, `555-123-4567` or `555.123.4567`.
pub(crate) fn is_phone(value: &str) -> bool {
    PHONE.is_match(value.trim())
}

pub(crate) fn is_vin(value: &str) -> bool {
    VIN.is_match(value.trim())
}
