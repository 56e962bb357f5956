//! Devscope viewer
//!
//! Runs the developer overlay over an in-memory sample world. Settings are
//! read from `overlay.toml` in the platform config directory, or from the
//! path given as the first argument.

mod app;
mod demo;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            devscope_core::config::load_from(&path)?
        }
        None => devscope_core::config::load(),
    };

    app::run(config)?;
    Ok(())
}
