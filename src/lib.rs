mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod generated;
mod phonevalidator;
mod regexp_cache;
mod regex_based_matcher;

#[cfg(test)]
mod tests;

pub use phonevalidator::{
    country_table, errors, CountryEntry, CountryRules, CountryTable, CountryTableBuilder,
    DialCodeSource, MalformedInputError, ParsedNumber, PhoneNumberType, PhoneTypeSupport,
    PhoneValidator, PhoneValidatorBuilder, PlainDigitsPolicy, ResolveError, StructuralError,
    StructuralRule, TableError, TypePrefixes, ValidatedNumber, ValidationError, ValidationResult,
    normalize, parse_metadata, PHONE_VALIDATOR,
};
pub use proto_gen::countrymetadata;
pub use regexp_cache::InvalidRegexError;

/// Validates a free-form phone number with the default validator.
///
/// ```
/// let result = global_phone_validator::validate_phone_number("+91 98765 43210", None, false);
/// assert!(result.is_valid);
/// assert_eq!(Some("+919876543210"), result.e164.as_deref());
/// ```
pub fn validate_phone_number(
    input: &str,
    default_country: Option<&str>,
    mobile_only: bool,
) -> ValidationResult {
    PHONE_VALIDATOR.validate_phone_number(input, default_country, mobile_only)
}

/// Every country of the compiled-in table, in table order.
pub fn get_all_country_codes() -> &'static [CountryEntry] {
    PHONE_VALIDATOR.get_all_country_codes()
}

pub fn get_country_dial_code(iso_code: &str) -> Option<&'static str> {
    PHONE_VALIDATOR.get_country_dial_code(iso_code)
}

/// The preferred country for a dial code, `"+1"` and `"1"` are both accepted.
pub fn get_country_code_by_dial_code(dial_code: &str) -> Option<&'static CountryEntry> {
    PHONE_VALIDATOR.get_country_code_by_dial_code(dial_code)
}
