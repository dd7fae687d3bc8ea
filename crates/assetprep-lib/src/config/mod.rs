mod loader;
mod model;

pub use loader::load_settings;
pub use model::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, Settings};
