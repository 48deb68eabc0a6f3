use std::borrow::Cow;

use crate::{
    generated::metadata::METADATA,
    proto_gen::countrymetadata::CountryMetadataCollection,
};

use super::{
    errors::{StructuralError, TableError},
    helper_constants::{MAX_LENGTH_DIAL_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_CHARS, PLUS_SIGN},
};

/// Loads metadata from the compiled-in text-format table.
pub(super) fn load_compiled_metadata() -> Result<CountryMetadataCollection, TableError> {
    parse_metadata(METADATA)
}

/// Parses a country table written in protobuf text format, see
/// `resources/countrymetadata.proto` for the schema.
pub fn parse_metadata(text: &str) -> Result<CountryMetadataCollection, TableError> {
    protobuf::text_format::parse_from_str::<CountryMetadataCollection>(text)
        .map_err(|err| TableError::MalformedMetadata(err.to_string()))
}

/// Strips everything but digits and the plus sign from a raw phone number.
///
/// Whitespace and punctuation are removed, any Unicode decimal digit is
/// replaced by its ASCII value and the full-width plus becomes `+`. An interior
/// `+` is kept as is, it's up to the caller to reject it. Input which is
/// already normalized is returned borrowed.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit() || b == b'+') {
        return Cow::Borrowed(raw);
    }

    let decimals = dec_from_char::normalize_decimals(raw);
    let mut normalized = String::with_capacity(raw.len());
    for phone_char in decimals.chars() {
        if phone_char.is_ascii_digit() {
            normalized.push(phone_char);
        } else if PLUS_CHARS.contains(phone_char) {
            normalized.push_str(PLUS_SIGN);
        }
        // If neither of the above are true, we remove this character.
    }
    Cow::Owned(normalized)
}

/// Builds the `+<dial code><national number>` form in a single allocation.
pub(super) fn build_e164(dial_code: &str, national_number: &str) -> String {
    fast_cat::concat_str!(PLUS_SIGN, dial_code, national_number)
}

/// Checks the length bounds every national number has to satisfy,
/// whatever its country.
pub(super) fn test_universal_length(length: usize) -> Result<(), StructuralError> {
    if (MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&length) {
        Ok(())
    } else {
        Err(StructuralError::InvalidLength {
            length,
            min: MIN_LENGTH_FOR_NSN,
            max: MAX_LENGTH_FOR_NSN,
        })
    }
}

/// Returns the dial code without a leading `+` if it's made of 1 to 4 ASCII
/// digits.
pub(super) fn canonical_dial_code(dial_code: &str) -> Option<&str> {
    let digits = dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code);
    let valid = !digits.is_empty()
        && digits.len() <= MAX_LENGTH_DIAL_CODE
        && digits.bytes().all(|b| b.is_ascii_digit());
    valid.then_some(digits)
}

/// Returns the upper-cased ISO code if it's made of two ASCII letters.
pub(super) fn canonical_iso_code(iso_code: &str) -> Option<String> {
    let valid = iso_code.len() == 2 && iso_code.bytes().all(|b| b.is_ascii_alphabetic());
    valid.then(|| iso_code.to_ascii_uppercase())
}
