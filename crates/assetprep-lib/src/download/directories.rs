use std::path::{Path, PathBuf};

/// Creates each directory under `root` if it is missing.
///
/// Failures are logged and skipped; the returned count only includes
/// directories that exist afterwards.
pub async fn ensure_directories(root: &Path, directories: &[PathBuf]) -> usize {
    let mut ready = 0;
    for directory in directories {
        let path = root.join(directory);
        match tokio::fs::create_dir_all(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Directory ready");
                ready += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "Failed to create directory: {}", err);
            }
        }
    }
    tracing::info!("Directories created");
    ready
}
