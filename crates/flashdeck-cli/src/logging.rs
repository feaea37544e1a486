//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is unset.
///
/// Target matching is by prefix, so `flashdeck` covers every workspace crate.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,flashdeck=debug,tower_http=debug"
    } else {
        "warn,flashdeck=info"
    }
}

/// Initialize tracing to stdout.
///
/// Log level is controlled by `RUST_LOG` (priority) or the verbose flag.
pub fn init_tracing(verbose: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized
}
