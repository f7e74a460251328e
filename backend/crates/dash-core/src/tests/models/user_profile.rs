use crate::{Identity, StoredImagePath, UserProfile};

use uuid::Uuid;

#[test]
fn test_user_profile_new_has_no_image() {
    let id = Identity::parse("u1").unwrap();
    let profile = UserProfile::new(id.clone());

    assert_eq!(profile.id, id);
    assert_eq!(profile.email, None);
    assert!(!profile.has_image());
    assert_eq!(profile.created_at, profile.updated_at);
}

#[test]
fn test_user_profile_has_image() {
    let id = Identity::parse("u1").unwrap();
    let mut profile = UserProfile::new(id.clone());

    profile.image = Some(StoredImagePath::for_new_image(&id, Uuid::new_v4()));

    assert!(profile.has_image());
}
