use crate::Metrics;

use dash_auth::SessionVerifier;
use dash_config::ImageAccessPolicy;
use dash_db::UserStore;
use dash_storage::ImageStore;

use std::sync::Arc;

/// Shared application state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionVerifier>,
    pub images: ImageStore,
    pub image_access: ImageAccessPolicy,
    /// Remove the superseded blob after a replacement upload
    pub delete_replaced_images: bool,
    /// Request body cap for uploads; 0 means unlimited
    pub max_upload_bytes: usize,
    pub metrics: Metrics,
}
