//! End-to-end validation behavior across the public surface.

use pretty_assertions::assert_eq;

use ensutil::{
    EXTENDED_TEXT_KEYS, STANDARD_TEXT_KEYS, normalize_name, validate_address, validate_name,
};

static INVALID_NAME_CASES: [(&str, &str); 3] = [
    ("", "ENS name is required"),
    ("vitalik", "ENS name must include a TLD (e.g. .eth)"),
    // Otherwise-normalizable single labels still need a TLD
    ("Vitalik", "ENS name must include a TLD (e.g. .eth)"),
];

#[test]
fn test_invalid_name_messages() {
    for (input, expected) in INVALID_NAME_CASES {
        let result = validate_name(input);
        assert!(!result.valid, "{input:?} should be invalid");
        assert_eq!(result.normalized, None);
        assert_eq!(result.error.as_deref(), Some(expected), "for {input:?}");
    }
}

#[test]
fn test_valid_names_normalize() {
    let cases = [
        ("vitalik.eth", "vitalik.eth"),
        ("Vitalik.eth", "vitalik.eth"),
        ("Sub.Name.ETH", "sub.name.eth"),
        ("name.xyz", "name.xyz"),
        ("nick.art", "nick.art"),
    ];
    for (input, expected) in cases {
        let result = validate_name(input);
        assert!(result.valid, "{input:?} should be valid: {:?}", result.error);
        assert_eq!(result.error, None);
        assert_eq!(result.normalized.as_deref(), Some(expected));
    }
}

#[test]
fn test_disallowed_characters_report_the_input() {
    for input in ["xn--invalid\u{0}.eth", "bad\u{7}name.eth", "white space.eth"] {
        let result = validate_name(input);
        assert!(!result.valid, "{input:?} should be invalid");
        let error = result.error.expect("error message present");
        assert!(error.contains(input), "error should embed {input:?}: {error}");
    }
}

#[test]
fn test_normalization_idempotence() {
    for input in ["Vitalik.eth", "MÜLLER.eth", "a.b.c.xyz"] {
        let once = normalize_name(input).expect("normalizes");
        assert_eq!(normalize_name(&once), Some(once.clone()));
    }
}

#[test]
fn test_address_validation() {
    let valid = validate_address("0x0000000000000000000000000000000000000000");
    assert!(valid.valid);
    assert_eq!(valid.error, None);

    let garbage = validate_address("not-an-address");
    assert!(!garbage.valid);
    assert_eq!(garbage.error.as_deref(), Some("Invalid Ethereum address"));

    let empty = validate_address("");
    assert!(!empty.valid);
    assert_eq!(empty.error.as_deref(), Some("Ethereum address is required"));
}

#[test]
fn test_key_registries_are_consistent() {
    // Standard keys come first, in order, with no duplicates anywhere
    assert_eq!(
        &EXTENDED_TEXT_KEYS[..STANDARD_TEXT_KEYS.len()],
        STANDARD_TEXT_KEYS
    );
    let mut seen = std::collections::HashSet::new();
    for key in EXTENDED_TEXT_KEYS.iter() {
        assert!(seen.insert(key), "duplicate text key: {key}");
    }
}
