//! Main commands enum and primary subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands for the flashdeck tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (REST API, optionally with a built UI)
    Web(WebArgs),
}

/// Arguments for `flashdeck web`.
///
/// Every option falls back to a `FLASHDECK_*` environment variable, which
/// may also come from a `.env` file in the working directory.
#[derive(Args, Debug, Clone)]
pub struct WebArgs {
    /// Address to bind to
    #[arg(long, env = "FLASHDECK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to serve on
    #[arg(short, long, env = "FLASHDECK_PORT", default_value = "5000")]
    pub port: u16,

    /// Serve API endpoints only (do not serve static UI assets)
    ///
    /// By default, `flashdeck web` will auto-detect a built frontend (e.g.
    /// `./dist/public`) and serve it with SPA fallback. Use this flag when
    /// running the frontend dev server separately.
    #[arg(long)]
    pub api_only: bool,

    /// Path to the directory containing built frontend assets
    #[arg(long, env = "FLASHDECK_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable or comma-separated); all origins if unset
    #[arg(
        long = "allowed-origin",
        env = "FLASHDECK_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}
