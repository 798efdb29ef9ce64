use spars::config::app_config;
use tracing::Level;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(level: Level) {
    // Already set means a platform logger got there first
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(_level: Level) {
    // The web renderer installs its own console logger
}

fn main() {
    let config = app_config();
    init_tracing(config.map(|c| c.log_level).unwrap_or(Level::INFO));
    match config {
        Ok(config) => tracing::info!(api_base = %config.api_base, "starting SPARS"),
        Err(err) => tracing::error!(error = %err, "invalid configuration; requests will fail"),
    }
    dioxus::launch(spars::ui::App);
}
