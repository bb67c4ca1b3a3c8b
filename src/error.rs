//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebPEncode(String),

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid path: {0}")]
    Path(String),
}

pub type Result<T> = std::result::Result<T, Error>;
