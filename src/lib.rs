//! In-memory banking ledger: clients, checking accounts, deposits,
//! withdrawals and statements, driven from a text menu.

pub mod ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to this crate.
pub fn init_tracing(default_level: &str) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("rbank={default_level}")));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
