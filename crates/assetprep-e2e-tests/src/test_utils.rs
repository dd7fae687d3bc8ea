use assetprep_lib::cli::InstallParams;
use assetprep_lib::manifest::{LocalPathRewrite, Manifest, ManifestEntry};
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use eyre::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tempfile::TempDir;

pub const FONT_BYTES: &[u8] = &[0x77, 0x4f, 0x46, 0x32, 0x00, 0x01, 0x00, 0x00, 0xff, 0xfe];
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(5);

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Stylesheet served by the fixture, referencing fonts on the fixture's own webfonts path.
pub fn fixture_stylesheet(addr: SocketAddr) -> String {
    format!(
        "@font-face{{font-family:\"Font Awesome 5 Free\";src:url(http://{addr}/webfonts/fa-solid-900.woff2) format(\"woff2\")}}.fa{{display:inline-block}}"
    )
}

/// Starts a fixture CDN on an ephemeral port.
///
/// Routes: `/css/all.min.css`, `/js/lib.js`, `/webfonts/fa-solid-900.woff2`,
/// `/slow.js` (sleeps for [`SLOW_RESPONSE_DELAY`]); anything else is a 404.
pub async fn spawn_fixture_server() -> Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let stylesheet = fixture_stylesheet(addr);
    let app = Router::new()
        .route(
            "/css/all.min.css",
            get(move || {
                let stylesheet = stylesheet.clone();
                async move { stylesheet }
            }),
        )
        .route("/js/lib.js", get(|| async { "window.lib = {};" }))
        .route("/webfonts/fa-solid-900.woff2", get(|| async { FONT_BYTES }))
        .route(
            "/slow.js",
            get(|| async {
                tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
                "too late"
            }),
        )
        .fallback(|| async { StatusCode::NOT_FOUND });

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("Fixture server stopped: {}", err);
        }
    });

    Ok(addr)
}

/// Manifest shaped like the built-in one, pointed at the fixture server.
pub fn fixture_manifest(addr: SocketAddr, extra: &[(&str, &str)]) -> Manifest {
    let base = format!("http://{addr}");
    let mut entries = vec![
        ManifestEntry::new(format!("{base}/css/all.min.css"), "css/font-awesome.min.css"),
        ManifestEntry::new(format!("{base}/js/lib.js"), "js/lib.js"),
        ManifestEntry::new(
            format!("{base}/webfonts/fa-solid-900.woff2"),
            "fonts/fa-solid-900.woff2",
        ),
    ];
    entries.extend(
        extra
            .iter()
            .map(|(path, destination)| ManifestEntry::new(format!("{base}{path}"), *destination)),
    );

    Manifest {
        directories: ["css", "js", "fonts"].into_iter().map(PathBuf::from).collect(),
        entries,
        rewrite: Some(LocalPathRewrite {
            target: PathBuf::from("css/font-awesome.min.css"),
            cdn_prefix: format!("{base}/webfonts/"),
            local_prefix: "../fonts/".to_string(),
        }),
    }
}

pub fn install_params(manifest: Manifest, output_dir: &Path, timeout: Duration) -> InstallParams {
    InstallParams {
        manifest,
        output_dir: output_dir.to_path_buf(),
        timeout,
        user_agent: "assetprep-e2e".to_string(),
    }
}

pub fn setup_test_environment() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}
