//! Points downloaded stylesheets at locally stored fonts.

use crate::error::AssetPrepError;
use crate::manifest::LocalPathRewrite;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The file was rewritten; `replacements` may be zero.
    Rewritten { replacements: usize },
    /// The target file does not exist, nothing was written.
    Missing,
}

/// Replaces every literal occurrence of the CDN prefix in the target file.
///
/// The file is read as UTF-8 and written back in full, even when nothing
/// matched.
pub async fn rewrite_local_paths(
    output_dir: &Path,
    rule: &LocalPathRewrite,
) -> Result<RewriteOutcome, AssetPrepError> {
    let path = output_dir.join(&rule.target);
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        tracing::info!(path = %path.display(), "Nothing to rewrite, file is absent");
        return Ok(RewriteOutcome::Missing);
    }

    let content =
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AssetPrepError::RewriteRead {
                path: path.clone(),
                reason: e.to_string(),
            })?;

    let replacements = content.matches(rule.cdn_prefix.as_str()).count();
    let rewritten = content.replace(&rule.cdn_prefix, &rule.local_prefix);

    tokio::fs::write(&path, rewritten)
        .await
        .map_err(|e| AssetPrepError::RewriteWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), replacements, "Rewrote CDN references");
    Ok(RewriteOutcome::Rewritten { replacements })
}
