use std::str::FromStr;
use tracing::Level;

// Diagnostics go to stderr; stdout carries the interactive console.
pub fn setup_tracing(log_level: &str) {
    let level = Level::from_str(log_level).unwrap_or(Level::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
