//! Diagnostic tracing, separate from the batch report.
//!
//! The report (processing lines, child stdout, failure summary) always goes to
//! stdout. Tracing goes to stderr and is controlled by `RUST_LOG`, defaulting
//! to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
