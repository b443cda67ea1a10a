pub mod core;
pub mod error;
pub mod types;

pub use crate::core::MarqueeCore;
pub use crate::error::{AuthError, CatalogError, Error, Result, StoreError, UploadError};
