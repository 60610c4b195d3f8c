//! Arbor Driver
//!
//! Arbor has no parser — programs are built through the arena constructors.
//! This crate ships a handful of built-in sample programs and the commands
//! that render and evaluate them, which is all the CLI surface the language
//! needs.

use std::sync::Once;

pub mod commands;
pub mod samples;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=arbor=debug` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
