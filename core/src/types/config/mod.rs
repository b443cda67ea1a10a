mod app;
mod core;

pub use app::{AppConfig, AppConfigError};
pub use core::Config;
