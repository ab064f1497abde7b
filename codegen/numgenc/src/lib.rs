//! numgen CLI library.
//!
//! The binary is a thin wrapper over [`commands`]; rendering is kept pure
//! (table + target in, artifact text out) so it can be exercised directly
//! from tests without touching the filesystem.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for the CLI.
///
/// Only installs a subscriber when `RUST_LOG` is set, so plain runs stay
/// silent and the generated artifact on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
