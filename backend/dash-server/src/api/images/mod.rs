pub mod images;
pub mod upload_response;
