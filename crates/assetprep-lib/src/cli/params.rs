use crate::manifest::Manifest;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct InstallParams {
    pub manifest: Manifest,
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}
