pub mod error;
pub mod extractors;
pub mod images;
pub mod users;
