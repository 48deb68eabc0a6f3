// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{trace, warn};

use crate::{
    interfaces::MatcherApi,
    proto_gen::countrymetadata::CountryMetadataCollection,
    regex_based_matcher::RegexBasedMatcher,
};

use super::{
    country_table::{
        CountryEntry, CountryRules, CountryTable, CountryTableBuilder, PhoneTypeSupport,
        StructuralRule, TypePrefixes,
    },
    errors::{MalformedInputError, ResolveError, StructuralError, TableError, ValidationError},
    helper_constants::{MAX_LENGTH_DIAL_CODE, MIN_LENGTH_FOR_NSN, MIN_NORMALIZED_LENGTH, PLUS_SIGN, TRUNK_PREFIX},
    helper_functions::{build_e164, load_compiled_metadata, normalize, test_universal_length},
    helper_types::ParsedNumber,
    validation_result::{ValidatedNumber, ValidationResult},
    DialCodeSource, PhoneNumberType, PlainDigitsPolicy,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ValidationError>;

pub struct PhoneValidator {
    /// An API for structural pattern checks.
    matcher_api: Box<dyn MatcherApi>,

    /// Countries, dial codes and the rules attached to them. Never changes
    /// once the validator is built.
    table: CountryTable,

    /// What to do with plain digits when no default country is given.
    plain_digits_policy: PlainDigitsPolicy,
}

impl PhoneValidator {
    /// Builds a validator over the compiled-in metadata.
    ///
    /// # Panics
    ///
    /// If the compiled-in metadata is corrupt, which the build script and
    /// the test suite rule out.
    pub(super) fn new() -> Self {
        match Self::builder().build() {
            Err(err) => {
                let err_message = format!("Could not build validator from compiled-in metadata: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(validator) => validator,
        }
    }

    pub fn builder() -> PhoneValidatorBuilder {
        PhoneValidatorBuilder::default()
    }

    /// Builds a validator over the given metadata instead of the compiled-in one.
    pub fn new_for_metadata(
        metadata: CountryMetadataCollection,
    ) -> std::result::Result<Self, TableError> {
        Self::builder().metadata(metadata).build()
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn plain_digits_policy(&self) -> &PlainDigitsPolicy {
        &self.plain_digits_policy
    }

    /// Validates a free-form phone number and flattens the outcome into a
    /// [`ValidationResult`]. See [`PhoneValidator::validate`] for the
    /// reason-carrying variant.
    pub fn validate_phone_number(
        &self,
        input: &str,
        default_country: Option<&str>,
        mobile_only: bool,
    ) -> ValidationResult {
        self.validate(input, default_country, mobile_only).into()
    }

    /// Validates a free-form phone number.
    ///
    /// The number is normalized, its country is resolved from the leading
    /// `+`, the trunk prefix or the default country, the national number is
    /// checked against the structural rule of the dial code and finally
    /// classified by its prefix table.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw number, punctuation and spaces allowed.
    /// * `default_country` - ISO code of the country the number is expected
    ///   in. A number written with `+` must then use the same dial code.
    /// * `mobile_only` - Reject everything not classified as mobile.
    pub fn validate(
        &self,
        input: &str,
        default_country: Option<&str>,
        mobile_only: bool,
    ) -> Result<ValidatedNumber<'_>> {
        let parsed = self.parse(input, default_country)?;

        if let Err(err) = self.check_structure(parsed.dial_code, &parsed.national_number) {
            trace!(
                "Number '{}' rejected for dial code {}: {}",
                parsed.national_number, parsed.dial_code, err
            );
            return Err(err.into());
        }

        let phone_type = self.detect_phone_number_type(parsed.dial_code, &parsed.national_number);
        if mobile_only && phone_type != PhoneNumberType::Mobile {
            trace!("Number '{}' is not a mobile number", parsed.national_number);
            return Err(ValidationError::NotMobile(phone_type));
        }

        let e164 = build_e164(parsed.dial_code, &parsed.national_number);
        Ok(ValidatedNumber {
            dial_code: parsed.dial_code,
            national_number: parsed.national_number,
            e164,
            phone_type,
            country: parsed.country,
        })
    }

    /// Normalizes the input and resolves its dial code and national number
    /// without checking the national number any further.
    pub fn parse(&self, input: &str, default_country: Option<&str>) -> Result<ParsedNumber<'_>> {
        if input.trim().is_empty() {
            trace!("Rejecting empty input");
            return Err(MalformedInputError::Empty.into());
        }
        let normalized = normalize(input);
        if normalized.len() < MIN_NORMALIZED_LENGTH {
            trace!("Rejecting '{}': too short after normalization", input);
            return Err(MalformedInputError::TooShort { length: normalized.len() }.into());
        }

        let default_country = default_country
            .map(|iso_code| self.find_default_country(iso_code))
            .transpose()?;
        let parsed = self.resolve(&normalized, default_country).inspect_err(|err| {
            trace!("Could not resolve country of '{}': {}", normalized, err);
        })?;
        Ok(parsed)
    }

    fn find_default_country(&self, iso_code: &str) -> std::result::Result<&CountryEntry, ResolveError> {
        self.table.get_country_by_iso(iso_code).ok_or_else(|| {
            warn!("Invalid or unknown region code provided: {}", iso_code);
            ResolveError::UnknownDefaultCountry(iso_code.to_string())
        })
    }

    /// Splits a normalized number into dial code and national number.
    fn resolve<'a>(
        &'a self,
        normalized: &str,
        default_country: Option<&'a CountryEntry>,
    ) -> std::result::Result<ParsedNumber<'a>, ResolveError> {
        if let Some(digits) = normalized.strip_prefix(PLUS_SIGN) {
            let detected = self
                .find_dial_code(digits)
                .ok_or(ResolveError::NoDialCodeMatch)?;
            let country = match default_country {
                Some(expected) if expected.dial_code() != detected.dial_code() => {
                    return Err(ResolveError::CountryMismatch {
                        detected: detected.dial_code().to_string(),
                        expected: expected.dial_code().to_string(),
                    });
                }
                // The caller's country is more precise than the preferred
                // region of a shared dial code.
                Some(expected) => expected,
                None => detected,
            };
            return Ok(ParsedNumber {
                dial_code: country.dial_code(),
                national_number: digits[country.dial_code().len()..].to_string(),
                country: Some(country),
                source: DialCodeSource::FromNumberWithPlusSign,
            });
        }

        if let Some(national_number) = normalized.strip_prefix(TRUNK_PREFIX) {
            let country = default_country.ok_or(ResolveError::DefaultCountryRequired)?;
            return Ok(ParsedNumber {
                dial_code: country.dial_code(),
                national_number: national_number.to_string(),
                country: Some(country),
                source: DialCodeSource::FromDefaultCountryWithTrunkPrefix,
            });
        }

        let country = match (default_country, &self.plain_digits_policy) {
            (Some(country), _) => country,
            (None, PlainDigitsPolicy::RequireDefaultCountry) => {
                return Err(ResolveError::DefaultCountryRequired);
            }
            (None, PlainDigitsPolicy::AssumeCountry(iso_code)) => self.find_default_country(iso_code)?,
        };
        Ok(ParsedNumber {
            dial_code: country.dial_code(),
            national_number: normalized.to_string(),
            country: Some(country),
            source: DialCodeSource::FromDefaultCountry,
        })
    }

    /// Longest known dial code at the start of `digits` which leaves a
    /// national number of at least [`MIN_LENGTH_FOR_NSN`] characters.
    fn find_dial_code(&self, digits: &str) -> Option<&CountryEntry> {
        (1..=MAX_LENGTH_DIAL_CODE).rev().find_map(|length| {
            if digits.len() < length + MIN_LENGTH_FOR_NSN {
                return None;
            }
            let candidate = &digits[..length];
            if !candidate.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            self.table.get_country_by_dial_code(candidate)
        })
    }

    /// Checks the national number against the universal bounds and the
    /// structural rule of the dial code, if any.
    pub fn check_structure(
        &self,
        dial_code: &str,
        national_number: &str,
    ) -> std::result::Result<(), StructuralError> {
        let length = national_number.len();
        test_universal_length(length)?;
        if !national_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StructuralError::NotAllDigits);
        }
        let Some(rule) = self.table.get_structural_rule(dial_code) else {
            return Ok(());
        };
        if !rule.accepts_length(length) {
            return Err(StructuralError::InvalidLength {
                length,
                min: rule.min_length(),
                max: rule.max_length(),
            });
        }
        if !self.matcher_api.match_national_number(national_number, rule) {
            return Err(StructuralError::PatternMismatch {
                pattern: rule.pattern().to_string(),
            });
        }
        Ok(())
    }

    pub fn is_structurally_valid(&self, dial_code: &str, national_number: &str) -> bool {
        self.check_structure(dial_code, national_number).is_ok()
    }

    /// Classifies a national number by the prefix table of its dial code.
    /// Returns [`PhoneNumberType::Unknown`] when the dial code has no table
    /// or no prefix matches.
    pub fn detect_phone_number_type(&self, dial_code: &str, national_number: &str) -> PhoneNumberType {
        let Some(prefix_table) = self.table.get_prefix_table(dial_code) else {
            trace!("Number '{national_number}' type unknown - no prefix table for dial code {dial_code}");
            return PhoneNumberType::Unknown;
        };
        match prefix_table.match_prefix(national_number) {
            Some((phone_type, prefix)) => {
                trace!("Number '{national_number}' is a {phone_type} number (prefix {prefix})");
                phone_type
            }
            None => {
                trace!("Number '{national_number}' type unknown - doesn't match any prefix");
                PhoneNumberType::Unknown
            }
        }
    }

    /// All countries in table order.
    pub fn get_all_country_codes(&self) -> &[CountryEntry] {
        self.table.countries()
    }

    /// Dial code of the given ISO country, compared case-insensitively.
    pub fn get_country_dial_code(&self, iso_code: &str) -> Option<&str> {
        self.table
            .get_country_by_iso(iso_code)
            .map(|country| country.dial_code())
    }

    /// Preferred country for a dial code, with or without the leading `+`.
    pub fn get_country_code_by_dial_code(&self, dial_code: &str) -> Option<&CountryEntry> {
        self.table.get_country_by_dial_code(dial_code)
    }

    pub fn get_phone_type_rules(&self, dial_code: &str) -> Option<&TypePrefixes> {
        self.table.get_type_prefixes(dial_code)
    }

    pub fn get_validation_rules(&self, dial_code: &str) -> Option<&StructuralRule> {
        self.table.get_structural_rule(dial_code)
    }

    pub fn get_countries_with_phone_type_support(&self) -> Vec<PhoneTypeSupport> {
        self.table.get_countries_with_phone_type_support()
    }

    pub fn has_phone_type_support(&self, dial_code: &str, phone_type: PhoneNumberType) -> bool {
        self.table.has_phone_type_support(dial_code, phone_type)
    }
}

/// Configures a [`PhoneValidator`]. Everything is checked in
/// [`PhoneValidatorBuilder::build`], including every structural pattern.
#[derive(Debug, Default)]
pub struct PhoneValidatorBuilder {
    metadata: Option<CountryMetadataCollection>,
    table: CountryTableBuilder,
    plain_digits_policy: PlainDigitsPolicy,
}

impl PhoneValidatorBuilder {
    /// Replaces the compiled-in metadata.
    pub fn metadata(mut self, metadata: CountryMetadataCollection) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Adds a country, or replaces the one with the same ISO code.
    pub fn register_country(mut self, entry: CountryEntry) -> Self {
        self.table = self.table.country(entry);
        self
    }

    /// Merges `rules` over the rules already known for `dial_code`.
    pub fn register_rules(mut self, dial_code: impl Into<String>, rules: CountryRules) -> Self {
        self.table = self.table.rules(dial_code, rules);
        self
    }

    pub fn preferred_region(mut self, dial_code: impl Into<String>, iso_code: impl Into<String>) -> Self {
        self.table = self.table.preferred_region(dial_code, iso_code);
        self
    }

    pub fn plain_digits_policy(mut self, policy: PlainDigitsPolicy) -> Self {
        self.plain_digits_policy = policy;
        self
    }

    pub fn build(self) -> std::result::Result<PhoneValidator, TableError> {
        let metadata = match self.metadata {
            Some(metadata) => metadata,
            None => load_compiled_metadata()?,
        };
        let table = self.table.metadata(metadata).build()?;

        if let PlainDigitsPolicy::AssumeCountry(iso_code) = &self.plain_digits_policy {
            if table.get_country_by_iso(iso_code).is_none() {
                return Err(TableError::UnknownAssumedCountry(iso_code.clone()));
            }
        }

        let matcher_api: Box<dyn MatcherApi> = Box::new(RegexBasedMatcher::new());
        for rule in table.structural_rules() {
            matcher_api.prepare(rule)?;
        }

        Ok(PhoneValidator {
            matcher_api,
            table,
            plain_digits_policy: self.plain_digits_policy,
        })
    }
}
