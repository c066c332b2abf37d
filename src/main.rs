#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use anyhow::anyhow;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use RUST_LOG to control verbosity, e.g. RUST_LOG=desktop_clock=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting desktop clock");

    eframe::run_native(
        desktop_clock::config::WINDOW_TITLE,
        desktop_clock::config::native_options(),
        Box::new(|cc| Box::new(desktop_clock::ClockWindow::new(cc))),
    )
    .map_err(|e| anyhow!("failed to run the clock window: {e}"))?;

    tracing::info!("clock window closed");
    Ok(())
}
