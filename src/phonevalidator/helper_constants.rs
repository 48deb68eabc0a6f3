use super::PhoneNumberType;

/// Inputs shorter than this after normalization are rejected before any
/// country resolution happens.
pub const MIN_NORMALIZED_LENGTH: usize = 7;
// The minimum and maximum length of the national significant number,
// regardless of country rules.
pub const MIN_LENGTH_FOR_NSN: usize = 4;
pub const MAX_LENGTH_FOR_NSN: usize = 15;
/// The maximum length of a dial code.
pub const MAX_LENGTH_DIAL_CODE: usize = 4;

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHARS: &str = "+\u{FF0B}";
/// Domestic trunk prefix stripped from nationally written numbers.
pub const TRUNK_PREFIX: &str = "0";

/// Order in which service categories are tested. Service ranges are carved
/// out of mobile and landline ranges, so they go first.
pub const CLASSIFICATION_PRIORITY: [PhoneNumberType; 6] = [
    PhoneNumberType::TollFree,
    PhoneNumberType::Premium,
    PhoneNumberType::VoIP,
    PhoneNumberType::Special,
    PhoneNumberType::Mobile,
    PhoneNumberType::Landline,
];

/// The region reported for a dial code shared by several countries. Dial
/// codes not listed here fall back to table order.
pub const PREFERRED_REGIONS: &[(&str, &str)] = &[
    ("1", "US"),
    ("7", "RU"),
    ("39", "IT"),
    ("44", "GB"),
    ("47", "NO"),
    ("61", "AU"),
    ("64", "NZ"),
    ("212", "MA"),
    ("262", "RE"),
    ("358", "FI"),
    ("590", "GP"),
    ("599", "CW"),
];
