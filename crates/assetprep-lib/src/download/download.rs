use super::fetcher::AssetFetcher;
use super::types::DownloadSummary;
use crate::error::AssetPrepError;
use crate::manifest::ManifestEntry;
use std::path::Path;
use tracing::{info, warn};

async fn fetch_and_write<F: AssetFetcher>(
    fetcher: &F,
    url: &str,
    output_path: &Path,
) -> Result<usize, AssetPrepError> {
    let body = fetcher.fetch(url).await?;

    tokio::fs::write(output_path, &body)
        .await
        .map_err(|e| AssetPrepError::AssetWrite {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(body.len())
}

/// Downloads one asset and writes the body verbatim to `output_path`.
///
/// Errors are logged rather than returned so the caller can move on to the
/// next entry.
pub async fn download_asset<F: AssetFetcher>(fetcher: &F, url: &str, output_path: &Path) -> bool {
    info!(url = %url, output = %output_path.display(), "Downloading");

    match fetch_and_write(fetcher, url, output_path).await {
        Ok(bytes) => {
            info!(output = %output_path.display(), bytes, "Downloaded");
            true
        }
        Err(err) => {
            warn!(url = %url, output = %output_path.display(), "Failed to download: {}", err);
            false
        }
    }
}

/// Downloads every entry in order, one at a time.
pub async fn run_manifest<F: AssetFetcher>(
    fetcher: &F,
    entries: &[ManifestEntry],
    output_dir: impl AsRef<Path>,
) -> DownloadSummary {
    let mut summary = DownloadSummary::new(entries.len());

    for entry in entries {
        let output_path = output_dir.as_ref().join(&entry.destination);
        summary.record(download_asset(fetcher, &entry.url, &output_path).await);
    }

    tracing::info!(
        successful = summary.successful,
        failed = summary.failed(),
        "Finished downloading {} assets",
        summary.total
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::FetchError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned responses and remembers the order of requests.
    #[derive(Default)]
    struct StaticFetcher {
        responses: HashMap<String, Result<Vec<u8>, FetchError>>,
        requested: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        fn with(mut self, url: &str, response: Result<Vec<u8>, FetchError>) -> Self {
            self.responses.insert(url.to_string(), response);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl AssetFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| {
                    Err(FetchError::Status {
                        url: url.to_string(),
                        status: 404,
                    })
                })
        }
    }

    fn timeout(url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Timeout {
            url: url.to_string(),
        })
    }

    #[tokio::test]
    async fn test_one_success_one_timeout() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("js")).unwrap();

        let fetcher = StaticFetcher::default()
            .with("https://cdn.example/x.js", Ok(b"X".to_vec()))
            .with("https://cdn.example/slow.js", timeout("https://cdn.example/slow.js"));
        let entries = vec![
            ManifestEntry::new("https://cdn.example/x.js", "js/x.js"),
            ManifestEntry::new("https://cdn.example/slow.js", "js/slow.js"),
        ];

        let summary = run_manifest(&fetcher, &entries, temp_dir.path()).await;

        assert_eq!(summary.to_string(), "1/2");
        assert_eq!(std::fs::read(temp_dir.path().join("js/x.js")).unwrap(), b"X");
        assert!(!temp_dir.path().join("js/slow.js").exists());
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_remaining_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("css")).unwrap();

        let fetcher = StaticFetcher::default()
            .with("https://cdn.example/a.css", timeout("https://cdn.example/a.css"))
            .with("https://cdn.example/c.css", Ok(b"c{}".to_vec()))
            .with(
                "https://cdn.example/d.css",
                Err(FetchError::Transport {
                    url: "https://cdn.example/d.css".to_string(),
                    reason: "connection reset".to_string(),
                }),
            )
            .with("https://cdn.example/e.css", Ok(b"e{}".to_vec()));
        // b.css has no canned response and gets a 404.
        let entries: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| ManifestEntry::new(format!("https://cdn.example/{n}.css"), format!("css/{n}.css")))
            .collect();

        let summary = run_manifest(&fetcher, &entries, temp_dir.path()).await;

        assert_eq!(summary.successful, 2);
        assert_eq!(summary.failed(), 3);
        assert_eq!(
            fetcher.requested(),
            entries.iter().map(|e| e.url.clone()).collect::<Vec<_>>(),
            "Every entry should be requested in manifest order"
        );
        assert_eq!(std::fs::read(temp_dir.path().join("css/e.css")).unwrap(), b"e{}");
    }

    #[tokio::test]
    async fn test_binary_body_is_written_verbatim_and_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("font.woff2");
        std::fs::write(&output_path, b"stale content that is longer").unwrap();

        let body: Vec<u8> = (0..=255u8).chain([0, 0, 0xff]).collect();
        let fetcher =
            StaticFetcher::default().with("https://cdn.example/font.woff2", Ok(body.clone()));

        assert!(download_asset(&fetcher, "https://cdn.example/font.woff2", &output_path).await);
        assert_eq!(std::fs::read(&output_path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_as_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        // Parent directory was never created.
        let output_path = temp_dir.path().join("missing/x.js");
        let fetcher = StaticFetcher::default().with("https://cdn.example/x.js", Ok(b"X".to_vec()));

        assert!(!download_asset(&fetcher, "https://cdn.example/x.js", &output_path).await);

        let err = fetch_and_write(&fetcher, "https://cdn.example/x.js", &output_path)
            .await
            .unwrap_err();
        assert!(matches!(err, AssetPrepError::AssetWrite { .. }));
    }
}
