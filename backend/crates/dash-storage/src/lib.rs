pub mod error;
pub mod image_blob;
pub mod image_store;

pub use error::{Result, StorageError};
pub use image_blob::ImageBlob;
pub use image_store::ImageStore;
