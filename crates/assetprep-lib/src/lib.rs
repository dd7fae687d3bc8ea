pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manifest;
pub mod output;
pub mod rewrite;

pub use config::Settings;
pub use error::AssetPrepError;
pub use manifest::{LocalPathRewrite, Manifest, ManifestEntry};
