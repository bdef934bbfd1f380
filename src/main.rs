//! eoscalc: Neonatal early-onset sepsis risk calculator
//!
//! Main entry point for the terminal application.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eoscalc::config::Settings;
use eoscalc::tui::App;

fn main() -> Result<()> {
    // Initialize logging.
    //
    // Writing logs to the terminal would corrupt the TUI (alternate screen), so an
    // interactive session logs to a file unless EOSCALC_LOG_MODE says otherwise.
    let settings = Settings::from_env();
    let interactive = std::io::stdout().is_terminal();

    let (writer, _guard) = if settings.log_to_file(interactive) {
        tracing_appender::non_blocking(settings.open_log_file()?)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    tracing::info!(log_file = %settings.log_file().display(), "Starting eoscalc...");

    let mut app = App::new();
    app.run()?;

    tracing::info!("eoscalc shutdown complete.");
    Ok(())
}
