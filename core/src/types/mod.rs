pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config};

pub(crate) mod email;
pub use email::{Email, EmailError};

pub(crate) mod movie;
pub use movie::{MovieId, MovieRecord};

pub(crate) mod session;
pub use session::Session;
