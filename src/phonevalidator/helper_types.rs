use super::{country_table::CountryEntry, DialCodeSource};

/// Result of country resolution: the dial code and the national number it
/// leaves, before any structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    pub(super) dial_code: &'a str,
    pub(super) national_number: String,
    pub(super) country: Option<&'a CountryEntry>,
    pub(super) source: DialCodeSource,
}

impl<'a> ParsedNumber<'a> {
    pub fn dial_code(&self) -> &'a str {
        self.dial_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// The resolved country. For a shared dial code written with `+` this is
    /// the preferred region, otherwise the default (or assumed) country.
    pub fn country(&self) -> Option<&'a CountryEntry> {
        self.country
    }

    pub fn source(&self) -> DialCodeSource {
        self.source
    }
}
