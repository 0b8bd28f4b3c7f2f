//! Usage: Tracing initialization for processes that embed the forwarder.
//!
//! The library itself only emits through `tracing`; installing a subscriber
//! is left to the host, which may call [`init`] or bring its own.

use std::sync::OnceLock;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr `fmt` subscriber. Safe to call more than once; if another
/// global subscriber is already set, this is a no-op.
pub fn init() {
    TRACING_INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init();
    });
}

fn default_env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            tracing_subscriber::EnvFilter::new("info,oss_upload_forwarder=debug")
        }
        #[cfg(not(debug_assertions))]
        {
            tracing_subscriber::EnvFilter::new("info")
        }
    })
}
