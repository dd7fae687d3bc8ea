use crate::cli::params::InstallParams;
use crate::download::{AssetFetcher, DownloadSummary, HttpFetcher, ensure_directories, run_manifest};
use crate::error::AssetPrepError;
use crate::output::{banner, download_report, next_steps};
use crate::rewrite::{RewriteOutcome, rewrite_local_paths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub summary: DownloadSummary,
    /// `None` when the manifest has no rewrite rule or the rewrite failed
    pub rewrite: Option<RewriteOutcome>,
}

pub async fn run_install(params: InstallParams) -> Result<InstallReport, AssetPrepError> {
    let fetcher = HttpFetcher::new(params.timeout, &params.user_agent)?;
    install_with(&fetcher, params).await
}

/// Runs the whole install with the given fetcher. Per-asset and rewrite
/// failures are logged and reflected in the report, never returned.
pub async fn install_with<F: AssetFetcher>(
    fetcher: &F,
    params: InstallParams,
) -> Result<InstallReport, AssetPrepError> {
    let InstallParams {
        manifest,
        output_dir,
        ..
    } = params;

    println!("{}", banner());

    ensure_directories(&output_dir, &manifest.directories).await;

    tracing::info!(
        "Downloading {} assets into {}",
        manifest.entries.len(),
        output_dir.display()
    );
    let summary = run_manifest(fetcher, &manifest.entries, &output_dir).await;
    println!("{}", download_report(&summary));

    let rewrite = match &manifest.rewrite {
        Some(rule) => match rewrite_local_paths(&output_dir, rule).await {
            Ok(outcome) => {
                if let RewriteOutcome::Rewritten { .. } = outcome {
                    tracing::info!(
                        path = %rule.target.display(),
                        "Fixed stylesheet to use local fonts"
                    );
                }
                Some(outcome)
            }
            Err(err) => {
                tracing::warn!("Failed to rewrite local paths: {}", err);
                None
            }
        },
        None => None,
    };

    println!("{}", next_steps());

    Ok(InstallReport { summary, rewrite })
}
