//! Batch conversion of JPEG/PNG directory trees to WebP.
//!
//! Walks an input tree, mirrors its directory structure into an output tree,
//! and re-encodes every supported image at a fixed target size using a
//! center-crop-then-resize transform.

pub mod converter;
pub mod error;
pub mod models;
pub mod transform;

pub use error::{Error, Result};
