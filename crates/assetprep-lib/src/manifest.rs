use std::path::{Path, PathBuf};

const FONT_AWESOME_WEBFONTS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/webfonts/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Remote URL of the asset
    pub url: String,
    /// Destination path, relative to the output root
    pub destination: PathBuf,
}

impl ManifestEntry {
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
        }
    }
}

/// Replaces absolute CDN references inside one downloaded file with a relative prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPathRewrite {
    /// File to patch, relative to the output root
    pub target: PathBuf,
    pub cdn_prefix: String,
    pub local_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Directories created under the output root before downloading
    pub directories: Vec<PathBuf>,
    pub entries: Vec<ManifestEntry>,
    pub rewrite: Option<LocalPathRewrite>,
}

impl Manifest {
    /// Bootstrap, Select2, Font Awesome, jQuery, SheetJS and JSZip, plus the
    /// Font Awesome web fonts that the stylesheet references.
    pub fn builtin() -> Self {
        let entries = vec![
            // Stylesheets
            ManifestEntry::new(
                "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css",
                "css/bootstrap.min.css",
            ),
            ManifestEntry::new(
                "https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/css/select2.min.css",
                "css/select2.min.css",
            ),
            ManifestEntry::new(
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/css/all.min.css",
                "css/font-awesome.min.css",
            ),
            // Scripts
            ManifestEntry::new(
                "https://code.jquery.com/jquery-3.6.0.min.js",
                "js/jquery-3.6.0.min.js",
            ),
            ManifestEntry::new(
                "https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/js/select2.min.js",
                "js/select2.min.js",
            ),
            ManifestEntry::new(
                "https://cdnjs.cloudflare.com/ajax/libs/xlsx/0.17.4/xlsx.full.min.js",
                "js/xlsx.full.min.js",
            ),
            ManifestEntry::new(
                "https://cdnjs.cloudflare.com/ajax/libs/jszip/3.10.1/jszip.min.js",
                "js/jszip.min.js",
            ),
        ]
        .into_iter()
        .chain(
            [
                "fa-solid-900.woff2",
                "fa-solid-900.woff",
                "fa-regular-400.woff2",
                "fa-regular-400.woff",
                "fa-brands-400.woff2",
                "fa-brands-400.woff",
            ]
            .into_iter()
            .map(|font| {
                ManifestEntry::new(
                    format!("{FONT_AWESOME_WEBFONTS}{font}"),
                    Path::new("fonts").join(font),
                )
            }),
        )
        .collect();

        Self {
            directories: ["css", "js", "fonts"].into_iter().map(PathBuf::from).collect(),
            entries,
            rewrite: Some(LocalPathRewrite {
                target: PathBuf::from("css/font-awesome.min.css"),
                cdn_prefix: FONT_AWESOME_WEBFONTS.to_string(),
                local_prefix: "../fonts/".to_string(),
            }),
        }
    }
}
