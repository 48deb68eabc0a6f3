use super::{country_table::CountryEntry, errors::ValidationError, PhoneNumberType};

/// A number which passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNumber<'a> {
    pub(super) dial_code: &'a str,
    pub(super) national_number: String,
    pub(super) e164: String,
    pub(super) phone_type: PhoneNumberType,
    pub(super) country: Option<&'a CountryEntry>,
}

impl<'a> ValidatedNumber<'a> {
    pub fn dial_code(&self) -> &'a str {
        self.dial_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// `+<dial code><national number>`, no further formatting.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn phone_type(&self) -> PhoneNumberType {
        self.phone_type
    }

    pub fn country(&self) -> Option<&'a CountryEntry> {
        self.country
    }
}

/// Flat outcome of [`PhoneValidator::validate_phone_number`](super::PhoneValidator::validate_phone_number).
///
/// An invalid result carries no other field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// The dial code, e.g. `"91"`.
    pub country_code: Option<String>,
    pub national_number: Option<String>,
    pub e164: Option<String>,
    pub phone_type: Option<PhoneNumberType>,
    pub iso_code: Option<String>,
    pub country_name: Option<String>,
}

impl ValidationResult {
    pub fn invalid() -> Self {
        Self::default()
    }

    /// `None` for an invalid result.
    pub fn is_mobile(&self) -> Option<bool> {
        self.is_type(PhoneNumberType::Mobile)
    }

    /// `None` for an invalid result.
    pub fn is_landline(&self) -> Option<bool> {
        self.is_type(PhoneNumberType::Landline)
    }

    fn is_type(&self, phone_type: PhoneNumberType) -> Option<bool> {
        if !self.is_valid {
            return None;
        }
        self.phone_type.map(|t| t == phone_type)
    }
}

impl From<ValidatedNumber<'_>> for ValidationResult {
    fn from(value: ValidatedNumber<'_>) -> Self {
        Self {
            is_valid: true,
            country_code: Some(value.dial_code.to_string()),
            national_number: Some(value.national_number),
            e164: Some(value.e164),
            phone_type: Some(value.phone_type),
            iso_code: value.country.map(|country| country.iso_code().to_string()),
            country_name: value.country.map(|country| country.name().to_string()),
        }
    }
}

impl From<Result<ValidatedNumber<'_>, ValidationError>> for ValidationResult {
    fn from(value: Result<ValidatedNumber<'_>, ValidationError>) -> Self {
        match value {
            Ok(validated) => validated.into(),
            Err(_) => Self::invalid(),
        }
    }
}
