mod directories;
mod download;
mod fetcher;
mod types;

pub use directories::ensure_directories;
pub use download::{download_asset, run_manifest};
pub use fetcher::{AssetFetcher, FetchError, HttpFetcher};
pub use types::DownloadSummary;
