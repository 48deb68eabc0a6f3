use proptest::prelude::*;

use crate::{
    get_all_country_codes, get_country_code_by_dial_code, get_country_dial_code, normalize,
    validate_phone_number, PhoneNumberType, ValidationResult, PHONE_VALIDATOR,
};

use super::{phonevalidator_tests::init_logger, region_code::RegionCode};

fn assert_valid(result: &ValidationResult, dial_code: &str, iso_code: &str, phone_type: PhoneNumberType) {
    assert!(result.is_valid, "{result:?}");
    assert_eq!(Some(dial_code), result.country_code.as_deref());
    assert_eq!(Some(iso_code), result.iso_code.as_deref());
    assert_eq!(Some(phone_type), result.phone_type);
}

#[test]
fn compiled_in_metadata_builds() {
    init_logger();
    assert!(get_all_country_codes().len() > 200);
    assert_eq!(Some("91"), get_country_dial_code(RegionCode::r#in()));
    assert_eq!(Some("86"), get_country_dial_code("cn"));
    assert_eq!(
        Some(RegionCode::us()),
        get_country_code_by_dial_code("+1").map(|c| c.iso_code())
    );
    assert_eq!(
        Some(RegionCode::ru()),
        get_country_code_by_dial_code("7").map(|c| c.iso_code())
    );
    assert_eq!(
        Some(RegionCode::gb()),
        get_country_code_by_dial_code("44").map(|c| c.iso_code())
    );
    assert_eq!(
        Some(RegionCode::jm()),
        get_country_code_by_dial_code("1876").map(|c| c.iso_code())
    );
}

#[test]
fn india() {
    init_logger();
    let result = validate_phone_number("+91 98765 43210", None, false);
    assert_valid(&result, "91", RegionCode::r#in(), PhoneNumberType::Mobile);
    assert_eq!(Some("9876543210"), result.national_number.as_deref());
    assert_eq!(Some("+919876543210"), result.e164.as_deref());
    assert_eq!(Some("India"), result.country_name.as_deref());

    let result = validate_phone_number("09876543210", Some(RegionCode::r#in()), false);
    assert_valid(&result, "91", RegionCode::r#in(), PhoneNumberType::Mobile);

    let result = validate_phone_number("9876543210", Some(RegionCode::r#in()), true);
    assert_valid(&result, "91", RegionCode::r#in(), PhoneNumberType::Mobile);
}

#[test]
fn north_america() {
    init_logger();
    let result = validate_phone_number("+18001234567", None, false);
    assert_valid(&result, "1", RegionCode::us(), PhoneNumberType::TollFree);

    let result = validate_phone_number("+19001234567", None, false);
    assert_valid(&result, "1", RegionCode::us(), PhoneNumberType::Premium);

    let result = validate_phone_number("+1 555 123 4567", None, false);
    assert_valid(&result, "1", RegionCode::us(), PhoneNumberType::Unknown);
    assert_eq!(Some("+15551234567"), result.e164.as_deref());
    assert_eq!(Some(false), result.is_mobile());
}

#[test]
fn europe() {
    init_logger();
    let result = validate_phone_number("+4917677274194", None, false);
    assert_valid(&result, "49", RegionCode::de(), PhoneNumberType::Mobile);

    let result = validate_phone_number("+447123456789", None, false);
    assert_valid(&result, "44", RegionCode::gb(), PhoneNumberType::Mobile);

    let result = validate_phone_number("+442079460958", None, false);
    assert_valid(&result, "44", RegionCode::gb(), PhoneNumberType::Landline);
    assert_eq!(Some(true), result.is_landline());

    let result = validate_phone_number("+448001234567", None, false);
    assert_valid(&result, "44", RegionCode::gb(), PhoneNumberType::TollFree);
}

#[test]
fn asia_pacific() {
    init_logger();
    let result = validate_phone_number("+8613800138000", None, false);
    assert_valid(&result, "86", RegionCode::cn(), PhoneNumberType::Mobile);

    let result = validate_phone_number("+817012345678", None, false);
    assert_valid(&result, "81", RegionCode::jp(), PhoneNumberType::Mobile);

    let result = validate_phone_number("+61412345678", None, false);
    assert_valid(&result, "61", RegionCode::au(), PhoneNumberType::Mobile);
}

#[test]
fn rejected_numbers() {
    init_logger();
    assert_eq!(ValidationResult::invalid(), validate_phone_number("12345", None, false));
    assert_eq!(
        ValidationResult::invalid(),
        validate_phone_number("+4917677274194", Some(RegionCode::r#in()), false)
    );
    assert_eq!(ValidationResult::invalid(), validate_phone_number("", None, false));
    assert_eq!(
        ValidationResult::invalid(),
        validate_phone_number("+442079460958", None, true)
    );
}

#[test]
fn phone_type_support() {
    init_logger();
    let supported = PHONE_VALIDATOR.get_countries_with_phone_type_support();
    assert_eq!("1", supported[0].dial_code);
    assert!(supported.windows(2).all(|pair| {
        let (a, b) = (&pair[0].dial_code, &pair[1].dial_code);
        (a.len(), a) < (b.len(), b)
    }));
    let india = supported.iter().find(|s| s.dial_code == "91").unwrap();
    assert_eq!(
        vec![PhoneNumberType::Mobile, PhoneNumberType::Landline, PhoneNumberType::TollFree, PhoneNumberType::Premium],
        india.supported_types
    );
    assert!(PHONE_VALIDATOR.has_phone_type_support("49", PhoneNumberType::VoIP));
    assert!(!PHONE_VALIDATOR.has_phone_type_support("1", PhoneNumberType::Mobile));
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,32}") {
        let once = normalize(&raw);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.bytes().all(|b| b.is_ascii_digit() || b == b'+'));
    }

    #[test]
    fn formatting_does_not_change_result(
        national in "[6-9][0-9]{9}",
        separator in prop::sample::select(vec![" ", "-", ".", "", " - "]),
    ) {
        let plain = format!("+91{national}");
        let formatted = format!("+91{}{}{}", &national[..5], separator, &national[5..]);
        prop_assert_eq!(
            validate_phone_number(&plain, None, false),
            validate_phone_number(&formatted, None, false)
        );
    }

    #[test]
    fn e164_round_trips(
        (input, default_country) in prop_oneof![
            "[6-9][0-9]{9}".prop_map(|n| (format!("0{n}"), "IN")),
            "7[0-9]{9}".prop_map(|n| (format!("0{n}"), "GB")),
            "1[5-7][0-9]{9}".prop_map(|n| (format!("0{n}"), "DE")),
            "13[0-9]{9}".prop_map(|n| (n, "CN")),
            "[2-8][0-9]{8}".prop_map(|n| (n, "AU")),
        ],
    ) {
        let first = validate_phone_number(&input, Some(default_country), false);
        prop_assert!(first.is_valid);
        let e164 = first.e164.clone().unwrap_or_default();
        let second = validate_phone_number(&e164, None, false);
        prop_assert_eq!(&first.country_code, &second.country_code);
        prop_assert_eq!(&first.national_number, &second.national_number);
        prop_assert_eq!(first.phone_type, second.phone_type);
        prop_assert_eq!(&first.e164, &second.e164);
    }

    #[test]
    fn mobile_only_accepts_only_mobile(national in "[1-9][0-9]{9}") {
        let input = format!("+44{national}");
        let unconstrained = validate_phone_number(&input, None, false);
        let mobile_only = validate_phone_number(&input, None, true);
        prop_assert!(unconstrained.is_valid);
        prop_assert_eq!(mobile_only.is_valid, unconstrained.is_mobile() == Some(true));
    }
}
