use crate::UserDto;
use crate::tests::identity;

use dash_core::{Identity, StoredImagePath, UserProfile};

fn image_for(owner: &Identity) -> StoredImagePath {
    StoredImagePath::from_record(format!("users/{}/images/abc123", owner)).unwrap()
}

#[test]
fn test_dto_without_image_has_no_url() {
    let profile = UserProfile::new(identity("u1"));

    let dto = UserDto::from(profile);

    assert_eq!(dto.id, "u1");
    assert_eq!(dto.image_url, None);
}

#[test]
fn test_dto_with_image_links_to_serve_route() {
    let mut profile = UserProfile::new(identity("u1"));
    profile.image = Some(image_for(&profile.id));
    profile.email = Some("u1@example.com".into());

    let dto = UserDto::from(profile);

    assert_eq!(dto.image_url.as_deref(), Some("/api/v1/users/u1/image"));
    assert_eq!(dto.email.as_deref(), Some("u1@example.com"));
}

#[test]
fn test_dto_does_not_expose_storage_path() {
    let mut profile = UserProfile::new(identity("u1"));
    let image: StoredImagePath = image_for(&profile.id);
    profile.image = Some(image.clone());

    let json = serde_json::to_value(UserDto::from(profile)).unwrap();

    assert!(!json.to_string().contains(image.as_str()));
}
