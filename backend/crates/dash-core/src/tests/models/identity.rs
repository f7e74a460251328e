use crate::{CoreError, Identity, MAX_IDENTITY_LENGTH};

use googletest::prelude::*;

#[test]
fn given_simple_id_when_parsed_then_ok() {
    let identity = Identity::parse("u1").unwrap();

    assert_eq!(identity.as_str(), "u1");
    assert_eq!(identity.to_string(), "u1");
}

#[test]
fn given_uuid_id_when_parsed_then_ok() {
    let result = Identity::parse("12345678-1234-1234-1234-123456789abc");

    assert_that!(result, ok(anything()));
}

#[test]
fn given_padded_id_when_parsed_then_invalid() {
    for raw in ["  user_42 ", " u1", "u1 ", "u1\t", "\nu1"] {
        let result: Result<Identity, CoreError> = raw.parse();
        assert!(
            matches!(result, Err(CoreError::InvalidIdentity { .. })),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn given_blank_id_when_parsed_then_missing() {
    let result = Identity::parse("   ");

    assert!(matches!(result, Err(CoreError::MissingIdentity { .. })));
}

#[test]
fn given_path_traversal_id_when_parsed_then_invalid() {
    for raw in ["..", "../etc", "a/b", "a\\b", "a.b", "user 1"] {
        let result = Identity::parse(raw);
        assert!(
            matches!(result, Err(CoreError::InvalidIdentity { .. })),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn given_overlong_id_when_parsed_then_invalid() {
    let raw = "a".repeat(MAX_IDENTITY_LENGTH + 1);

    let result = Identity::parse(&raw);

    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}

#[test]
fn given_max_length_id_when_parsed_then_ok() {
    let raw = "a".repeat(MAX_IDENTITY_LENGTH);

    assert_that!(Identity::parse(&raw), ok(anything()));
}
