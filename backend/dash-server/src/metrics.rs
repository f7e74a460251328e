use metrics::{counter, histogram};

/// Metrics collector for profile picture traffic
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "dash_server",
        }
    }

    /// Record a stored upload and its size
    pub fn image_uploaded(&self, bytes: usize) {
        counter!(format!("{}.images.uploaded", self.prefix)).increment(1);
        histogram!(format!("{}.images.upload_bytes", self.prefix)).record(bytes as f64);
    }

    /// Record an upload turned away before anything was written
    pub fn upload_rejected(&self, reason: &str) {
        counter!(format!("{}.images.upload_rejected", self.prefix)).increment(1);
        counter!(format!("{}.images.upload_rejected.{}", self.prefix, reason)).increment(1);
    }

    pub fn image_served(&self, bytes: u64) {
        counter!(format!("{}.images.served", self.prefix)).increment(1);
        histogram!(format!("{}.images.served_bytes", self.prefix)).record(bytes as f64);
    }

    pub fn image_not_found(&self) {
        counter!(format!("{}.images.not_found", self.prefix)).increment(1);
    }

    /// Record a superseded image removed from disk
    pub fn replaced_image_removed(&self) {
        counter!(format!("{}.images.replaced_removed", self.prefix)).increment(1);
    }

    /// Record an access denial (401 / 403)
    pub fn access_denied(&self, reason: &str) {
        counter!(format!("{}.access.denied", self.prefix)).increment(1);
        counter!(format!("{}.access.denied.{}", self.prefix, reason)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
