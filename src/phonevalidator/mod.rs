mod helper_constants;
mod helper_functions;
mod prefix_table;
pub mod country_table;
pub mod errors;
pub mod enums;
pub mod phonevalidator;
pub mod helper_types;
pub mod validation_result;

use std::sync::LazyLock;

pub use country_table::{
    CountryEntry, CountryRules, CountryTable, CountryTableBuilder, PhoneTypeSupport, StructuralRule,
    TypePrefixes,
};
pub use enums::{DialCodeSource, PhoneNumberType, PlainDigitsPolicy};
pub use errors::{
    MalformedInputError, ResolveError, StructuralError, TableError, ValidationError,
};
pub use helper_functions::{normalize, parse_metadata};
pub use helper_types::ParsedNumber;
pub use phonevalidator::{PhoneValidator, PhoneValidatorBuilder};
pub use validation_result::{ValidatedNumber, ValidationResult};

/// Validator over the compiled-in metadata, built on first use.
pub static PHONE_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(|| {
    PhoneValidator::new()
});
