use crate::{CoreError, Identity, StoredImagePath};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_owner_when_new_image_path_then_layout_is_users_owner_images_name() {
    let owner = Identity::parse("u1").unwrap();
    let image_id = Uuid::new_v4();

    let path = StoredImagePath::for_new_image(&owner, image_id);

    assert_eq!(
        path.as_str(),
        format!("users/u1/images/{}", image_id.simple())
    );
    assert!(path.is_owned_by(&owner));
    assert_that!(path.segments().count(), eq(4));
}

#[test]
fn given_new_image_path_when_reloaded_from_record_then_equal() {
    let owner = Identity::parse("u1").unwrap();
    let path = StoredImagePath::for_new_image(&owner, Uuid::new_v4());

    let reloaded = StoredImagePath::from_record(path.as_str()).unwrap();

    assert_eq!(reloaded, path);
}

#[test]
fn given_unsafe_record_values_when_rehydrated_then_rejected() {
    for raw in [
        "",
        "/etc/passwd",
        "users/../../etc/passwd",
        "users/./u1",
        "users//u1",
        "users\\u1\\images",
        "C:/Windows",
        "users/u1/",
    ] {
        let result = StoredImagePath::from_record(raw);
        assert!(
            matches!(result, Err(CoreError::InvalidStoredPath { .. })),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn given_other_owner_when_checking_ownership_then_false() {
    let owner = Identity::parse("u1").unwrap();
    let other = Identity::parse("u2").unwrap();
    let path = StoredImagePath::for_new_image(&owner, Uuid::new_v4());

    assert!(!path.is_owned_by(&other));
}
