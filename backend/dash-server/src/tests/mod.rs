mod api;

use crate::{AppState, Metrics};

use dash_auth::HeaderSessionVerifier;
use dash_config::ImageAccessPolicy;
use dash_core::Identity;
use dash_db::UserRepository;
use dash_storage::ImageStore;

use std::sync::Arc;

use tempfile::TempDir;

/// AppState over an in-memory database and a temp storage root, trusting
/// `X-User-Id` with no default user
pub(crate) async fn create_test_state(storage: &TempDir) -> AppState {
    let pool = dash_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        users: Arc::new(UserRepository::new(pool)),
        sessions: Arc::new(HeaderSessionVerifier::new(None)),
        images: ImageStore::new(storage.path()),
        image_access: ImageAccessPolicy::Public,
        delete_replaced_images: false,
        max_upload_bytes: 0,
        metrics: Metrics::new(),
    }
}

pub(crate) fn identity(raw: &str) -> Identity {
    Identity::parse(raw).unwrap()
}
