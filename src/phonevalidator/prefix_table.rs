use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::{country_table::TypePrefixes, helper_constants::CLASSIFICATION_PRIORITY, PhoneNumberType};

/// Prefix lists of one dial code, prepared for classification.
///
/// Categories are kept in [`CLASSIFICATION_PRIORITY`] order and each list is
/// deduplicated and sorted longest first, so the first hit of a scan is the
/// answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrefixTable {
    categories: Vec<(PhoneNumberType, Vec<String>)>,
}

impl PrefixTable {
    pub fn new(prefixes: &TypePrefixes) -> Self {
        let categories = CLASSIFICATION_PRIORITY
            .iter()
            .filter_map(|phone_type| {
                let sorted = sort_longest_first(prefixes.for_type(*phone_type));
                (!sorted.is_empty()).then_some((*phone_type, sorted))
            })
            .collect();
        Self { categories }
    }

    /// Returns the category and the prefix which matched the national number.
    pub fn match_prefix<'a>(&'a self, national_number: &str) -> Option<(PhoneNumberType, &'a str)> {
        self.categories.iter().find_map(|(phone_type, prefixes)| {
            prefixes
                .iter()
                .find(|prefix| national_number.starts_with(prefix.as_str()))
                .map(|prefix| (*phone_type, prefix.as_str()))
        })
    }

    pub fn has_type(&self, phone_type: PhoneNumberType) -> bool {
        self.categories.iter().any(|(category, _)| *category == phone_type)
    }

    /// Types with at least one prefix, in declaration order of [`PhoneNumberType`].
    pub fn supported_types(&self) -> Vec<PhoneNumberType> {
        PhoneNumberType::iter()
            .filter(|phone_type| self.has_type(*phone_type))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn sort_longest_first(prefixes: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(prefixes.len());
    let mut sorted: Vec<String> = prefixes
        .iter()
        .filter(|prefix| seen.insert(prefix.as_str()))
        .cloned()
        .collect();
    // Stable, so prefixes of equal length keep their table order.
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}
