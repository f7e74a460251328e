mod identity;
mod stored_image_path;
mod user_profile;
