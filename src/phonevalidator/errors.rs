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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

use super::PhoneNumberType;

/// Why a number was rejected by [`PhoneValidator::validate`](super::PhoneValidator::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    MalformedInput(#[from] MalformedInputError),
    #[error("{0}")]
    UnresolvedCountry(#[from] ResolveError),
    #[error("{0}")]
    StructuralViolation(#[from] StructuralError),
    /// Only mobile numbers were requested.
    #[error("Number is classified as {0}, but only mobile numbers are accepted")]
    NotMobile(PhoneNumberType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("Empty input")]
    Empty,
    #[error("Too short after normalization ({length} characters)")]
    TooShort { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No known dial code leaves a national number of at least 4 digits")]
    NoDialCodeMatch,
    #[error("A default country is required for numbers without a leading '+'")]
    DefaultCountryRequired,
    #[error("Unknown default country: {0}")]
    UnknownDefaultCountry(String),
    /// The number was written with a dial code other than the default country's.
    #[error("Number has dial code +{detected}, but default country uses +{expected}")]
    CountryMismatch { detected: String, expected: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("National number has {length} digits, expected {min} to {max}")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("National number does not match pattern {pattern}")]
    PatternMismatch { pattern: String },
    #[error("National number contains non-digit characters")]
    NotAllDigits,
}

/// Errors raised while building a country table or a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Malformed country metadata: {0}")]
    MalformedMetadata(String),
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
    #[error("Invalid dial code `{0}`, expected 1 to 4 digits")]
    InvalidDialCode(String),
    #[error("Invalid ISO country code `{0}`, expected 2 letters")]
    InvalidIsoCode(String),
    #[error("Rules registered for dial code `{0}` which no country uses")]
    UnknownDialCode(String),
    #[error("Invalid length bounds {min}..={max} for dial code `{dial_code}`")]
    InvalidLengthBounds { dial_code: String, min: i64, max: i64 },
    #[error("Invalid prefix `{prefix}` for dial code `{dial_code}`")]
    InvalidPrefix { dial_code: String, prefix: String },
    #[error("Country `{iso_code}` does not use dial code `{dial_code}`")]
    InvalidPreferredRegion { dial_code: String, iso_code: String },
    #[error("Assumed country `{0}` for plain digit numbers is not in the table")]
    UnknownAssumedCountry(String),
}
