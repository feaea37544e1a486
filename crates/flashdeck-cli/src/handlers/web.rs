//! Web command handler.
//!
//! Resolves `WebArgs` into a `ServerConfig` and runs the server until
//! Ctrl+C.

use std::path::{Path, PathBuf};

use anyhow::Result;
use flashdeck_axum::{ServerConfig, start_server};

use crate::commands::WebArgs;

/// Default static asset locations, relative to the working directory.
/// Order matters: prefer built assets first.
const STATIC_DIR_CANDIDATES: [&str; 3] = ["./dist/public", "./dist", "./client/dist"];

/// Build the server configuration from parsed arguments.
///
/// `base` is the directory the default static locations are resolved
/// against.
pub fn server_config(args: &WebArgs, base: &Path) -> ServerConfig {
    let mut config = ServerConfig::with_defaults()
        .with_host(args.host.clone())
        .with_port(args.port)
        .with_allowed_origins(args.allowed_origins.clone());

    if let Some(dir) = resolve_static_dir(args, base) {
        config = config.with_static_dir(dir);
    }

    config
}

/// Resolve static directory: api-only flag > explicit flag > default location > API-only.
fn resolve_static_dir(args: &WebArgs, base: &Path) -> Option<PathBuf> {
    if args.api_only {
        return None;
    }
    if let Some(ref dir) = args.static_dir {
        return Some(dir.clone());
    }

    STATIC_DIR_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.join("index.html").exists())
}

/// Execute the web command.
pub async fn execute(args: WebArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = server_config(&args, &cwd);

    match config.static_dir {
        Some(ref dir) => tracing::info!(
            static_dir = %dir.display(),
            "flashdeck web server starting on http://localhost:{}",
            config.port
        ),
        None => tracing::info!(
            "flashdeck web server starting (API only) on http://localhost:{}",
            config.port
        ),
    }
    tracing::debug!(?config, "Resolved server configuration");

    start_server(config).await
}
