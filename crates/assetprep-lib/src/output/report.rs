//! User-facing text printed around a run.

use crate::download::DownloadSummary;

pub fn banner() -> String {
    format!("assetprep - web asset downloader\n{}", "=".repeat(50))
}

pub fn download_report(summary: &DownloadSummary) -> String {
    let verdict = if summary.all_succeeded() {
        "All libraries downloaded successfully!"
    } else {
        "Some downloads failed. Check your internet connection."
    };

    format!(
        "\nDownload Summary:\nSuccessfully downloaded: {summary}\n{verdict}"
    )
}

pub fn next_steps() -> String {
    [
        "",
        "Next Steps:",
        "1. Copy your application's JavaScript files into the js/ folder",
        "2. Copy your own stylesheets into the css/ folder",
        "3. Reference the local copies instead of the CDN URLs in your HTML",
        "4. Publish the whole directory",
        "",
        "Ready for offline deployment!",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_partial_failure() {
        let summary = DownloadSummary {
            successful: 1,
            total: 2,
        };
        let report = download_report(&summary);

        assert!(report.contains("Successfully downloaded: 1/2"));
        assert!(report.contains("Some downloads failed"));
    }

    #[test]
    fn test_report_for_full_success() {
        let summary = DownloadSummary {
            successful: 13,
            total: 13,
        };
        let report = download_report(&summary);

        assert!(report.contains("Successfully downloaded: 13/13"));
        assert!(report.contains("All libraries downloaded successfully!"));
    }
}
