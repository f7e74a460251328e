pub mod identity;
pub mod stored_image_path;
pub mod user_profile;
