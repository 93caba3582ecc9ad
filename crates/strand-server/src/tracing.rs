//! Log setup for the server binary, plus the symbols that tag log lines by
//! segment.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (typically the
/// `--log-level` value) applies. Output is the compact terminal format without
/// targets.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();
}

/// Segment prefixes for log lines.
pub mod prefix {
    /// Startup
    pub const OPEN: &str = "✿";
    /// Shutdown
    pub const CLOSE: &str = "❀";
    /// Storage
    pub const DB: &str = "⊔";
    /// Query translation
    pub const QUERY: &str = "⌕";
}
